use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use icongen::{IconParams, generate_icons_with};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_sizes(sizes: &str) -> Result<Vec<u32>, AppError> {
    let mut parsed = Vec::new();
    for part in sizes.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let size = part.parse::<u32>().map_err(|_| AppError::InvalidSize {
            size: part.to_string(),
        })?;
        if size == 0 {
            return Err(AppError::ZeroSize { size });
        }
        parsed.push(size);
    }

    if parsed.is_empty() {
        return Err(AppError::InvalidSize {
            size: sizes.to_string(),
        });
    }
    Ok(parsed)
}

/// Preset file (or defaults) first, then explicit flags on top.
fn resolve_params(args: &CliArgs) -> Result<IconParams, AppError> {
    let mut params = match &args.params {
        Some(path) => {
            info!("Loading params preset {:?}", path);
            IconParams::from_json_file(path)?
        }
        None => IconParams::default(),
    };

    if let Some(sizes) = &args.sizes {
        params.sizes = parse_sizes(sizes)?;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(prefix) = &args.prefix {
        params.file_prefix = prefix.clone();
    }
    if let Some(compression) = args.compression {
        params.compression = compression;
    }
    if args.sequential {
        params.parallel = false;
    }

    Ok(params.validate()?)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let params = resolve_params(&args)?;
    debug!("Effective params: {:?}", params);

    if args.dump_params {
        println!("{}", params.to_json_string()?);
        return Ok(());
    }

    generate_icons_with(&args.input, &args.output_dir, &params, |icon| {
        println!("Generated: {}", icon.path.display());
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use icongen::ResampleFilter;

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("16,48,128").unwrap(), vec![16, 48, 128]);
        assert_eq!(parse_sizes(" 32 , 64 ,").unwrap(), vec![32, 64]);
        assert!(matches!(parse_sizes("16,big"), Err(AppError::InvalidSize { .. })));
        assert!(matches!(parse_sizes("0"), Err(AppError::ZeroSize { size: 0 })));
        assert!(matches!(parse_sizes(" , "), Err(AppError::InvalidSize { .. })));
    }

    #[test]
    fn test_flags_override_preset() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("preset.json");
        std::fs::write(
            &preset,
            r#"{ "sizes": [24, 24, 96], "filter": "nearest", "file_prefix": "app-" }"#,
        )
        .unwrap();

        let args = CliArgs::try_parse_from([
            "icongen",
            "--params",
            preset.to_str().unwrap(),
            "--filter",
            "mitchell",
            "--sequential",
        ])
        .unwrap();
        let params = resolve_params(&args).unwrap();

        assert_eq!(params.sizes, vec![24, 96]);
        assert_eq!(params.filter, ResampleFilter::Mitchell);
        assert_eq!(params.file_prefix, "app-");
        assert!(!params.parallel);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public");
        let args = CliArgs::try_parse_from([
            "icongen",
            "-i",
            dir.path().join("absent.jpeg").to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(args).unwrap_err();
        assert!(err.to_string().starts_with("Input image not found"));
        assert!(!out.exists());
    }
}
