//! Renders the sign field of a predicate over a tiny neighbourhood of a
//! degenerate configuration, one pixel per adjacent double, as a PNG.
//! The naive evaluations produce the familiar speckled sign noise; the
//! robust ones produce clean half-planes and circle arcs.

use exactpred::{Point2, PredicateContext};

// Directly evaluate the orient2d determinant.
fn naive_orient2d(p: Point2, q: Point2, r: Point2) -> f64 {
    (q[0] - p[0]) * (r[1] - q[1]) - (q[1] - p[1]) * (r[0] - q[0])
}

// Directly evaluate the incircle determinant.
fn naive_incircle(a: Point2, b: Point2, c: Point2, d: Point2) -> f64 {
    let m11 = a[0] - d[0];
    let m12 = a[1] - d[1];
    let m13 = m11 * m11 + m12 * m12;

    let m21 = b[0] - d[0];
    let m22 = b[1] - d[1];
    let m23 = m21 * m21 + m22 * m22;

    let m31 = c[0] - d[0];
    let m32 = c[1] - d[1];
    let m33 = m31 * m31 + m32 * m32;

    m11 * (m22 * m33 - m23 * m32) - m12 * (m21 * m33 - m23 * m31)
        + m13 * (m21 * m32 - m22 * m31)
}

use std::cmp::Ordering;

fn sign_field<F>(predicate: F, start: Point2, width: usize, height: usize) -> Vec<Ordering>
where
    F: Fn(Point2) -> f64,
{
    use float_extras::f64::nextafter;
    let mut yd = start[1];
    let mut data = Vec::with_capacity(width * height);

    for _ in 0..height {
        let mut xd = start[0];
        for _ in 0..width {
            data.push(predicate([xd, yd]).partial_cmp(&0.).unwrap());
            xd = nextafter(xd, f64::INFINITY);
        }
        yd = nextafter(yd, f64::INFINITY);
    }

    data
}

use std::path::Path;

fn write_png(data: &[Ordering], path: &Path, width: usize, height: usize) {
    assert_eq!(data.len(), width * height);

    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(path).unwrap();
    let w = &mut BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().unwrap();
    let data = data
        .iter()
        .map(|w| match w {
            Ordering::Less => 0u8,
            Ordering::Equal => 127,
            Ordering::Greater => 255,
        })
        .collect::<Vec<_>>();
    writer.write_image_data(&data).unwrap();
}

fn usage(name: &str) -> ! {
    eprintln!(
        "Usage: {} {{naive | robust}} {{incircle | orient2d}} <output.png>",
        name
    );
    std::process::exit(1);
}

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 4 {
        usage(&args[0])
    }

    let p1: Point2 = [12., 12.];
    let p2: Point2 = [24., 24.];
    let p3: Point2 = [-12., -12.];
    let ctx = PredicateContext::new(32.0, 32.0, 32.0);
    let predicate: Box<dyn Fn(Point2) -> f64> = match (args[1].as_str(), args[2].as_str()) {
        ("naive", "incircle") => Box::new(move |p| naive_incircle(p1, p3, p2, p)),
        ("naive", "orient2d") => Box::new(move |p| naive_orient2d(p1, p, p2)),
        ("robust", "incircle") => Box::new(move |p| ctx.incircle(p1, p3, p2, p)),
        ("robust", "orient2d") => Box::new(move |p| ctx.orient2d(p1, p, p2)),
        _ => usage(&args[0]),
    };

    let data = sign_field(predicate, [0.5, 0.5], 256, 256);
    write_png(&data, Path::new(&args[3]), 256, 256);
}
