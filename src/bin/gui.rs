use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbulb_voxels::init_logging();

    let settings = mandelbulb_voxels::RenderArgs::parse().into_settings()?;
    mandelbulb_voxels::run_gui(settings)?;

    Ok(())
}
