mod clusters;
mod mask;
mod selection;
