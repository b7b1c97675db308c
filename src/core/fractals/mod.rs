pub mod burning_ship;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
