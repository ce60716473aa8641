use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use qrstyle::helper::{load_overlay, save_svg};
use qrstyle::payload::{ContentPayload, WifiSecurity};
use qrstyle::source::ErrorCorrection;
use qrstyle::{
    render, BackgroundPattern, FinderShape, ModuleMatrix, ModuleShape, Result, StyleConfig,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ContentKind {
    Url,
    Text,
    Contact,
    Wifi,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Security {
    Wpa,
    Wep,
    Nopass,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Ecc {
    Low,
    Medium,
    Quartile,
    High,
}

/// Render a styled QR code as SVG.
#[derive(Debug, Parser)]
#[command(name = "qrstyle", version, about)]
struct Args {
    /// Kind of content to encode
    #[arg(long = "type", value_enum, default_value_t = ContentKind::Url)]
    kind: ContentKind,

    /// URL or text to encode
    #[arg(long, short)]
    content: Option<String>,

    #[arg(long)]
    contact_name: Option<String>,
    #[arg(long)]
    contact_phone: Option<String>,
    #[arg(long)]
    contact_email: Option<String>,
    #[arg(long)]
    contact_org: Option<String>,

    #[arg(long)]
    wifi_ssid: Option<String>,
    #[arg(long)]
    wifi_password: Option<String>,
    #[arg(long, value_enum, default_value_t = Security::Wpa)]
    wifi_security: Security,

    /// Error correction level used by the encoder
    #[arg(long, value_enum, default_value_t = Ecc::Medium)]
    ecc: Ecc,

    /// Render a textual grid (`#`/`.` per cell) instead of encoding content
    #[arg(long, conflicts_with = "content")]
    matrix: Option<PathBuf>,

    /// JSON style file; individual flags below override it
    #[arg(long)]
    style: Option<PathBuf>,

    #[arg(long)]
    module_shape: Option<String>,
    #[arg(long)]
    finder_shape: Option<String>,
    #[arg(long)]
    background_pattern: Option<String>,
    #[arg(long)]
    foreground: Option<String>,
    #[arg(long)]
    background: Option<String>,
    #[arg(long)]
    finder_color: Option<String>,
    /// Canvas width and height in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Logo image drawn over the center
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    out_dir: Option<String>,

    /// Output file name without extension
    #[arg(long)]
    name: Option<String>,

    /// Write the SVG to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Write a base64 data URL to stdout instead of a file
    #[arg(long, conflicts_with = "stdout")]
    data_url: bool,
}

impl Args {
    fn payload(&self) -> ContentPayload {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        match self.kind {
            ContentKind::Url => ContentPayload::Url {
                content: field(&self.content),
            },
            ContentKind::Text => ContentPayload::Text {
                content: field(&self.content),
            },
            ContentKind::Contact => ContentPayload::Contact {
                name: field(&self.contact_name),
                phone: field(&self.contact_phone),
                email: field(&self.contact_email),
                org: field(&self.contact_org),
            },
            ContentKind::Wifi => ContentPayload::Wifi {
                ssid: field(&self.wifi_ssid),
                password: field(&self.wifi_password),
                security: match self.wifi_security {
                    Security::Wpa => WifiSecurity::Wpa,
                    Security::Wep => WifiSecurity::Wep,
                    Security::Nopass => WifiSecurity::NoPass,
                },
            },
        }
    }

    fn style(&self) -> Result<StyleConfig> {
        let mut style = match &self.style {
            Some(path) => StyleConfig::from_json_file(path)?,
            None => StyleConfig::default(),
        };
        if let Some(shape) = &self.module_shape {
            style.module_shape = ModuleShape::from_name(shape);
        }
        if let Some(shape) = &self.finder_shape {
            style.finder_shape = FinderShape::from_name(shape);
        }
        if let Some(pattern) = &self.background_pattern {
            style.background_pattern = BackgroundPattern::from_name(pattern);
        }
        if let Some(color) = &self.foreground {
            style.foreground_color = color.clone();
        }
        if let Some(color) = &self.background {
            style.background_color = color.clone();
        }
        if let Some(color) = &self.finder_color {
            style.finder_color = color.clone();
        }
        if let Some(size) = self.size {
            style.canvas_size = size;
        }
        style.validate()?;
        Ok(style)
    }

    #[cfg_attr(not(feature = "encoder"), allow(dead_code))]
    fn ecc(&self) -> ErrorCorrection {
        match self.ecc {
            Ecc::Low => ErrorCorrection::Low,
            Ecc::Medium => ErrorCorrection::Medium,
            Ecc::Quartile => ErrorCorrection::Quartile,
            Ecc::High => ErrorCorrection::High,
        }
    }
}

#[cfg(feature = "encoder")]
fn encode(args: &Args) -> Result<ModuleMatrix> {
    use qrstyle::source::{ModuleSource, QrEncoderSource};

    let payload = args.payload();
    payload.validate()?;
    QrEncoderSource::new(args.ecc()).modules(&payload.encode())
}

#[cfg(not(feature = "encoder"))]
fn encode(args: &Args) -> Result<ModuleMatrix> {
    use qrstyle::RenderError;

    args.payload().validate()?;
    Err(RenderError::Encode(
        "built without the `encoder` feature; pass --matrix instead".to_owned(),
    ))
}

fn run(args: &Args) -> Result<()> {
    let style = args.style()?;
    let matrix = match &args.matrix {
        Some(path) => fs::read_to_string(path)?.parse::<ModuleMatrix>()?,
        None => encode(args)?,
    };
    let overlay = args.logo.as_ref().map(load_overlay).transpose()?;

    let doc = render(&matrix, &style, overlay.as_ref())?;

    if args.stdout || args.data_url {
        let text = if args.data_url {
            doc.to_data_url()
        } else {
            doc.into_string()
        };
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
    } else {
        let path = save_svg(&doc, args.out_dir.as_deref(), args.name.as_deref())?;
        info!("QR code written to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
