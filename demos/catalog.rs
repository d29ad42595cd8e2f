//! Prints area and volume reports for a handful of labeled shapes.
//!
//! Usage:
//! ```text
//! cargo run --example catalog
//! RUST_LOG=polymetric=debug cargo run --example catalog
//! ```

use polymetric::math::{Point3, Vector3};
use polymetric::operations::creation::{MakeBox, MakeHemisphere, MakePrism};
use polymetric::operations::query::{ConvexHullMetrics, Outline, VolumeMethod};
use polymetric::report::{Measurement, Report};
use polymetric::topology::Shape;
use polymetric::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polymetric.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polymetric=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polymetric=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let slab = Shape::builder()
        .point("M", [-1.0, 4.0, 5.0])
        .point("N", [-5.0, 4.0, 5.0])
        .point("O", [-5.0, 5.0, 4.0])
        .point("P", [-1.0, 5.0, 4.0])
        .point("Q", [-5.0, 5.0, 2.0])
        .point("R", [-1.0, 5.0, 2.0])
        .point("S", [-1.0, 4.0, 3.0])
        .point("T", [-5.0, 4.0, 3.0])
        .face(&["M", "N", "O", "P"])
        .face(&["O", "Q", "R", "P"])
        .face(&["Q", "T", "S", "R"])
        .face(&["M", "S", "T", "N"])
        .face(&["M", "P", "R", "S"])
        .face(&["N", "T", "Q", "O"])
        .build()?;
    section("Slanted slab");
    println!("{}", Report::measure(&slab, VolumeMethod::ConvexHull)?);
    let outline = Outline::new().execute(&slab)?;
    println!(
        "{} faces, {} edges ({} open or non-manifold)",
        outline.faces.len(),
        outline.edges.len(),
        outline.irregular_edges().count()
    );

    let block = Shape::builder()
        .point("A", [0.0, -13.0, 4.0])
        .point("B", [-6.0, -13.0, 4.0])
        .point("C", [-6.0, -1.0, 4.0])
        .point("D", [0.0, -1.0, 4.0])
        .point("E", [1.0, -2.0, 1.0])
        .point("F", [-5.0, -2.0, 1.0])
        .point("G", [-5.0, -14.0, 1.0])
        .point("H", [1.0, -14.0, 1.0])
        .face(&["A", "B", "C", "D"])
        .face(&["E", "F", "G", "H"])
        .face(&["A", "B", "G", "H"])
        .face(&["D", "C", "F", "E"])
        .face(&["A", "D", "E", "H"])
        .face(&["B", "C", "F", "G"])
        .build()?;
    section("Sheared block (hull volume)");
    println!("{}", Report::measure(&block, VolumeMethod::ConvexHull)?);
    section("Sheared block (legacy face pyramids)");
    println!("{}", Report::measure(&block, VolumeMethod::LegacyFacePyramid)?);

    let hemisphere = MakeHemisphere::from_diameter(
        &Point3::new(-3.0, -9.0, 4.0),
        &Point3::new(-3.0, -5.0, 4.0),
    )
    .execute()?;
    section("Hemisphere");
    println!("Radius: {:.2}", hemisphere.radius);
    println!("{}", Report::hemisphere(&hemisphere));

    let octahedron = ConvexHullMetrics::new(vec![
        Point3::new(-8.0, -7.0, 5.0),
        Point3::new(-8.0, 1.0, 9.0),
        Point3::new(-8.0, 9.0, 5.0),
        Point3::new(-8.0, 1.0, 1.0),
        Point3::new(-5.0, 1.0, 5.0),
        Point3::new(-11.0, 1.0, 5.0),
    ])
    .execute()?;
    section("Octahedron");
    println!(
        "{}",
        Report::new(
            Measurement::new(octahedron.area),
            Measurement::new(octahedron.volume)
        )
    );

    let cuboid = MakeBox::from_corner(
        Point3::new(-6.0, -1.0, 1.0),
        Point3::new(-6.0, 3.0, 1.0),
        Point3::new(-6.0, -1.0, -6.0),
        Point3::new(-10.0, -1.0, 1.0),
    )
    .measure()?;
    section("Box");
    println!(
        "{}",
        Report::new(
            Measurement::new(cuboid.surface_area()),
            Measurement::new(cuboid.volume())
        )
    );

    let prism = MakePrism::new(
        vec![
            ("A", Point3::new(4.0, -5.0, 2.0)),
            ("B", Point3::new(4.0, -3.0, 2.0)),
            ("C", Point3::new(4.0, -3.0, 4.0)),
            ("D", Point3::new(4.0, 3.0, 4.0)),
            ("E", Point3::new(4.0, 3.0, 2.0)),
            ("F", Point3::new(4.0, 5.0, 2.0)),
            ("G", Point3::new(4.0, 5.0, -1.0)),
            ("H", Point3::new(4.0, -5.0, -1.0)),
        ],
        Vector3::new(-4.0, 0.0, 0.0),
    )
    .measure()?;
    section("Notched prism");
    println!("Base area: {:.2} square units", prism.base_area);
    println!("Base perimeter: {:.2} units", prism.base_perimeter);
    println!("Height: {:.2} units", prism.height);
    println!(
        "{}",
        Report::new(
            Measurement::new(prism.surface_area()),
            Measurement::new(prism.volume())
        )
    );

    Ok(())
}

fn section(title: &str) {
    println!("\n== {title}");
}
