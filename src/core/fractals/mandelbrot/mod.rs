pub mod algorithm;
pub mod controls;
pub mod mandelbrot_config;
