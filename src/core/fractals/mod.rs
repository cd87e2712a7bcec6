pub mod mandelbulb;
