use adaptive_predicates::{fast, incircle_certified, orient2d_certified, Coord, Stage};

use std::cmp::Ordering;
fn sweep<F>(predicate: F, start: Coord<f64>, width: usize, height: usize) -> Vec<u8>
where
    F: Fn(Coord<f64>) -> u8,
{
    use float_extras::f64::nextafter;
    let mut yd = start.y;
    let mut data = Vec::with_capacity(width * height);

    for _ in 0..height {
        let mut xd = start.x;
        for _ in 0..width {
            data.push(predicate(Coord { x: xd, y: yd }));
            xd = nextafter(xd, f64::INFINITY);
        }
        yd = nextafter(yd, f64::INFINITY);
    }

    data
}

fn sign_shade(value: f64) -> u8 {
    match value.partial_cmp(&0.) {
        Some(Ordering::Less) => 0,
        Some(Ordering::Equal) | None => 127,
        Some(Ordering::Greater) => 255,
    }
}

fn stage_shade(stage: Stage) -> u8 {
    match stage {
        Stage::Filter => 0,
        Stage::Adaptive => 127,
        Stage::Exact => 255,
    }
}

use std::path::Path;
fn write_png(
    data: &[u8],
    path: &Path,
    width: usize,
    height: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(data.len(), width * height);

    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;
    Ok(())
}

fn usage(name: &str) -> ! {
    eprintln!(
        "Usage: {} {{naive | robust | stage}} {{incircle | orient2d}} <output.png>",
        name
    );
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 4 {
        usage(&args[0])
    }

    let p1 = Coord { x: 12., y: 12. };
    let p2 = Coord { x: 24., y: 24. };
    let p3 = Coord { x: -12., y: -12. };
    let predicate: Box<dyn Fn(Coord<f64>) -> u8> = match (args[1].as_str(), args[2].as_str()) {
        ("naive", "incircle") => Box::new(|p| sign_shade(fast::incircle(p1, p3, p2, p))),
        ("naive", "orient2d") => Box::new(|p| sign_shade(fast::orient2d(p1, p, p2))),
        ("robust", "incircle") => {
            Box::new(|p| sign_shade(incircle_certified(p1, p3, p2, p).value))
        }
        ("robust", "orient2d") => Box::new(|p| sign_shade(orient2d_certified(p1, p, p2).value)),
        ("stage", "incircle") => Box::new(|p| stage_shade(incircle_certified(p1, p3, p2, p).stage)),
        ("stage", "orient2d") => Box::new(|p| stage_shade(orient2d_certified(p1, p, p2).stage)),
        _ => usage(&args[0]),
    };

    let data = sweep(predicate, Coord { x: 0.5, y: 0.5 }, 256, 256);
    write_png(&data, Path::new(&args[3]), 256, 256)
}
