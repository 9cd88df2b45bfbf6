use anyhow::Context;
use bookster_thumbnail::ThumbnailConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ThumbnailConfig::default();
    let thumbnail = bookster_thumbnail::generate_to_file(&config).with_context(|| {
        format!(
            "failed to create thumbnail at {}",
            config.output_path.display()
        )
    })?;

    println!(
        "Thumbnail created successfully at: {}",
        config.output_path.display()
    );
    println!("Image size: {}x{}px", thumbnail.width(), thumbnail.height());
    Ok(())
}
