mod color;
mod path;
