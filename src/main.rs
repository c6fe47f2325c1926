#![warn(unused_extern_crates)]

use std::path::PathBuf;

use anyhow::{Error, Result};
use clap::{Args, Parser};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use facecut::{
    Analysis, LandmarkSet, MeasurementSource, Measurements, PointF32, RectF32, classify, styles_for,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CmdArgs {
    #[command(flatten)]
    input: Input,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// Explicit measurements in pixels: face length, cheekbone width,
    /// jawline width, forehead width
    #[arg(short, long, value_name = "L,C,J,F")]
    measurements: Option<String>,

    /// Candidate face box from a detector, as WxH pixels; repeat for
    /// multiple candidates (the largest wins)
    #[arg(short = 'b', long = "face-box", value_name = "WxH")]
    face_boxes: Vec<String>,

    /// Face-mesh landmark file: {"width", "height", "points": [[x, y], ...]}
    /// with normalized coordinates
    #[arg(short, long, value_name = "FILE")]
    landmarks: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
struct LandmarkFile {
    width: u32,
    height: u32,
    points: Vec<(f32, f32)>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let args = CmdArgs::parse();

    let measurements = match (&args.input.measurements, &args.input.landmarks) {
        (Some(spec), _) => parse_measurements(spec)?,
        (_, Some(path)) => {
            let file: LandmarkFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            let points = file
                .points
                .into_iter()
                .map(|(x, y)| PointF32::new(x, y))
                .collect();
            MeasurementSource::FaceMesh(LandmarkSet::new(points, file.width, file.height))
                .derive_measurements()?
        }
        _ => {
            let boxes = args
                .input
                .face_boxes
                .iter()
                .map(|spec| parse_box(spec))
                .collect::<Result<Vec<_>>>()?;
            MeasurementSource::FaceBoxes(boxes).derive_measurements()?
        }
    };

    let shape = classify(&measurements);
    let analysis = Analysis {
        shape,
        measurements,
        recommendations: styles_for(shape),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("Face shape: {shape}");
        println!("Recommended haircuts:");
        for style in analysis.recommendations {
            println!("  {} - {}", style.name, style.description);
        }
    }

    Ok(())
}

fn parse_measurements(spec: &str) -> Result<Measurements> {
    let values = spec
        .split(',')
        .map(|v| v.trim().parse::<f32>().map_err(Error::from))
        .collect::<Result<Vec<f32>>>()?;

    match values[..] {
        [fl, cw, jw, fw] => Ok(Measurements::new(fl, cw, jw, fw)),
        _ => Err(Error::msg(format!(
            "expected 4 comma-separated measurements, got {}",
            values.len()
        ))),
    }
}

fn parse_box(spec: &str) -> Result<RectF32> {
    let (w, h) = spec
        .split_once('x')
        .ok_or_else(|| Error::msg(format!("expected WxH, got {spec:?}")))?;

    Ok(RectF32::from_tl(
        0.,
        0.,
        w.trim().parse::<f32>()?,
        h.trim().parse::<f32>()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_spec_parses() {
        let m = parse_measurements("130, 100, 80, 95").unwrap();
        assert_eq!(m.face_length, 130.);
        assert_eq!(m.forehead_width, 95.);
        assert!(parse_measurements("1,2,3").is_err());
    }

    #[test]
    fn box_spec_parses() {
        let r = parse_box("120x150").unwrap();
        assert_eq!(r.w, 120.);
        assert_eq!(r.h, 150.);
        assert!(parse_box("120").is_err());
    }
}
