mod mask_surface_area;
mod neighborhood_encoding3;
mod surface_area_table;
