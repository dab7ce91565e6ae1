// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rt-viewer")]
#[command(about = "Interactive first-person viewer for a GPU ray tracer", long_about = None)]
pub struct Cli {
    /// JSON file with viewer settings; flags given here take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Distance moved per frame for each held movement key
    #[arg(long = "move-speed")]
    pub move_speed: Option<f32>,

    /// Look-direction change per pixel of pointer motion
    #[arg(long = "rotate-speed")]
    pub rotate_speed: Option<f32>,

    /// Publish an up vector kept perpendicular to the look direction
    #[arg(long = "orthonormal-up", default_value = "false")]
    pub orthonormal_up: bool,

    /// Leave the cursor visible and free instead of grabbing it
    #[arg(long = "no-grab-cursor", default_value = "false")]
    pub no_grab_cursor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["rt-viewer"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.width.is_none());
        assert!(!cli.orthonormal_up);
        assert!(!cli.no_grab_cursor);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "rt-viewer",
            "--width",
            "1024",
            "--move-speed",
            "0.5",
            "--orthonormal-up",
            "--config",
            "viewer.json",
        ])
        .unwrap();
        assert_eq!(cli.width, Some(1024));
        assert_eq!(cli.move_speed, Some(0.5));
        assert!(cli.orthonormal_up);
        assert_eq!(cli.config, Some(PathBuf::from("viewer.json")));
    }

    #[test]
    fn test_rejects_bad_number() {
        assert!(Cli::try_parse_from(["rt-viewer", "--height", "tall"]).is_err());
    }
}
