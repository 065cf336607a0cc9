mod contour_length_table;
mod mask_contour_length;
