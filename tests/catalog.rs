//! Labeled shapes measured end to end, with the two-decimal report text.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use polymetric::error::{PolymetricError, ShapeError};
use polymetric::math::{Point3, Vector3};
use polymetric::operations::creation::{MakeBox, MakeHemisphere, MakePrism};
use polymetric::operations::query::{
    ConvexHullMetrics, Outline, SurfaceArea, Volume, VolumeMethod,
};
use polymetric::operations::transform::{Rotate, Translate};
use polymetric::report::{Measurement, Report};
use polymetric::topology::{EdgeKind, Shape};

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn slanted_slab() -> Shape {
    Shape::builder()
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
        .build()
        .unwrap()
}

fn open_step() -> Shape {
    Shape::builder()
        .point("A", [-1.0, 0.0, 8.0])
        .point("B", [-5.0, 0.0, 8.0])
        .point("C", [-5.0, 10.0, 8.0])
        .point("D", [-1.0, 10.0, 8.0])
        .point("E", [-1.0, 10.0, 5.0])
        .point("F", [-5.0, 10.0, 5.0])
        .point("G", [-5.0, 3.0, 5.0])
        .point("H", [-1.0, 3.0, 5.0])
        .point("I", [-1.0, 3.0, 0.0])
        .point("J", [-5.0, 3.0, 0.0])
        .point("K", [-5.0, 0.0, 0.0])
        .point("L", [-1.0, 0.0, 0.0])
        .face(&["A", "B", "C", "D"])
        .face(&["D", "E", "F", "C"])
        .face(&["E", "H", "G", "F"])
        .face(&["H", "I", "J", "G"])
        .face(&["I", "L", "K", "J"])
        .face(&["L", "A", "B", "K"])
        .build()
        .unwrap()
}

fn sheared_block() -> Shape {
    Shape::builder()
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
        .build()
        .unwrap()
}

#[test]
fn slanted_slab_area_and_hull_volume() {
    let shape = slanted_slab();
    let report = Report::measure(&shape, VolumeMethod::ConvexHull).unwrap();
    assert_relative_eq!(report.area.value(), 20.0 + 8.0 * 2f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(report.volume.value(), 8.0, epsilon = 1e-9);
    assert_eq!(
        report.to_string(),
        "Total Surface Area: 31.31 square units\nTotal Volume: 8.00 cubic units"
    );

    let outline = Outline::new().execute(&shape).unwrap();
    assert_eq!(outline.edges.len(), 12);
    assert_eq!(outline.irregular_edges().count(), 0);
}

#[test]
fn open_step_reproduces_legacy_numbers() {
    let shape = open_step();
    let report = Report::measure(&shape, VolumeMethod::LegacyFacePyramid).unwrap();
    assert_relative_eq!(report.area.value(), 144.0, epsilon = 1e-9);
    assert_relative_eq!(report.volume.value(), 640.0 / 6.0, epsilon = 1e-9);
    assert_eq!(report.volume.to_string(), "106.67");

    // The two L-shaped side walls are missing.
    let outline = Outline::new().execute(&shape).unwrap();
    let open: Vec<_> = outline
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Boundary)
        .collect();
    assert_eq!(open.len(), 12);

    let err = Volume::new()
        .with_method(VolumeMethod::SignedDecomposition)
        .execute(&shape)
        .unwrap_err();
    assert!(matches!(
        err,
        PolymetricError::Shape(ShapeError::InconsistentWinding { .. })
    ));
}

#[test]
fn hemisphere_on_diameter() {
    let m = MakeHemisphere::from_diameter(&p(-3.0, -9.0, 4.0), &p(-3.0, -5.0, 4.0))
        .execute()
        .unwrap();
    assert_relative_eq!(m.radius, 2.0);
    let report = Report::hemisphere(&m);
    assert_eq!(report.area.to_string(), "12.00π");
    assert_eq!(report.volume.to_string(), "5.33π");
}

#[test]
fn sheared_block_face_methods() {
    let shape = sheared_block();
    let area = SurfaceArea::new().execute(&shape).unwrap();
    let expected_area = 144.0 + 2.0 * 360f64.sqrt() + 2.0 * 1440f64.sqrt();
    assert_relative_eq!(area, expected_area, epsilon = 1e-9);

    let legacy = Volume::new()
        .with_method(VolumeMethod::LegacyFacePyramid)
        .execute(&shape)
        .unwrap();
    assert_relative_eq!(legacy, 146.0, epsilon = 1e-9);

    // The block is convex, so its faces are the hull facets.
    let hull = ConvexHullMetrics::of_shape(&shape).execute().unwrap();
    assert_relative_eq!(hull.area, area, epsilon = 1e-9);
    assert_relative_eq!(hull.volume, 216.0, epsilon = 1e-9);
}

#[test]
fn octahedron_hull() {
    let points = vec![
        p(-8.0, -7.0, 5.0),
        p(-8.0, 1.0, 9.0),
        p(-8.0, 9.0, 5.0),
        p(-8.0, 1.0, 1.0),
        p(-5.0, 1.0, 5.0),
        p(-11.0, 1.0, 5.0),
    ];
    let hull = ConvexHullMetrics::new(points).execute().unwrap();
    let report = Report::new(Measurement::new(hull.area), Measurement::new(hull.volume));
    assert_eq!(
        report.to_string(),
        "Total Surface Area: 167.04 square units\nTotal Volume: 128.00 cubic units"
    );
    assert_eq!(hull.mesh.indices().len(), 8);
}

#[test]
fn box_from_corner() {
    let mk = MakeBox::from_corner(
        p(-6.0, -1.0, 1.0),
        p(-6.0, 3.0, 1.0),
        p(-6.0, -1.0, -6.0),
        p(-10.0, -1.0, 1.0),
    );
    let m = mk.measure().unwrap();
    assert_relative_eq!(m.surface_area(), 144.0);
    assert_relative_eq!(m.volume(), 112.0);

    let shape = mk.execute().unwrap();
    let report = Report::measure(&shape, VolumeMethod::SignedDecomposition).unwrap();
    assert_relative_eq!(report.area.value(), 144.0, epsilon = 1e-9);
    assert_relative_eq!(report.volume.value(), 112.0, epsilon = 1e-9);
}

#[test]
fn notched_prism() {
    let base = vec![
        ("A", p(4.0, -5.0, 2.0)),
        ("B", p(4.0, -3.0, 2.0)),
        ("C", p(4.0, -3.0, 4.0)),
        ("D", p(4.0, 3.0, 4.0)),
        ("E", p(4.0, 3.0, 2.0)),
        ("F", p(4.0, 5.0, 2.0)),
        ("G", p(4.0, 5.0, -1.0)),
        ("H", p(4.0, -5.0, -1.0)),
    ];
    let mk = MakePrism::new(base, Vector3::new(-4.0, 0.0, 0.0))
        .with_top_labels(vec!["J", "K", "L", "M", "N", "O", "P", "I"]);
    let m = mk.measure().unwrap();
    assert_relative_eq!(m.base_area, 42.0, epsilon = 1e-9);
    assert_relative_eq!(m.base_perimeter, 30.0, epsilon = 1e-9);
    assert_relative_eq!(m.height, 4.0, epsilon = 1e-9);
    assert_relative_eq!(m.volume(), 168.0, epsilon = 1e-9);
    assert_relative_eq!(m.surface_area(), 204.0, epsilon = 1e-9);

    let shape = mk.execute().unwrap();
    assert_relative_eq!(
        Volume::new()
            .with_method(VolumeMethod::SignedDecomposition)
            .execute(&shape)
            .unwrap(),
        168.0,
        epsilon = 1e-9
    );
    // The notch makes the hull larger than the prism.
    let hull = Volume::new().execute(&shape).unwrap();
    assert!(hull > 168.0);
}

#[test]
fn twin_diamond_hull() {
    let points = [
        [4.0, -2.0, -1.0],
        [4.0, -1.0, -2.0],
        [4.0, -2.0, -3.0],
        [4.0, -3.0, -2.0],
        [0.0, -3.0, -2.0],
        [0.0, -2.0, -3.0],
        [0.0, -1.0, -2.0],
        [0.0, -2.0, -1.0],
        [4.0, 2.0, -1.0],
        [4.0, 3.0, -2.0],
        [4.0, 2.0, -3.0],
        [4.0, 1.0, -2.0],
        [0.0, 1.0, -2.0],
        [0.0, 2.0, -3.0],
        [0.0, 3.0, -2.0],
        [0.0, 2.0, -1.0],
    ]
    .map(Point3::from)
    .to_vec();
    let hull = ConvexHullMetrics::new(points).execute().unwrap();
    // Hexagonal cross-section of area 10 and perimeter 8 + 4 sqrt(2), 4 deep.
    assert_relative_eq!(hull.volume, 40.0, epsilon = 1e-9);
    assert_relative_eq!(hull.area, 52.0 + 16.0 * 2f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn hull_volume_ignores_placement() {
    let block = MakeBox::new(p(0.0, 0.0, 0.0), p(3.0, 4.0, 5.0))
        .execute()
        .unwrap();
    let turned = Rotate::new(p(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0), 0.7)
        .execute(&block)
        .unwrap();
    for offset in [1.0e3, 1.0e5] {
        let moved = Translate::new(Vector3::repeat(offset))
            .execute(&turned)
            .unwrap();
        let hull = ConvexHullMetrics::of_shape(&moved).execute().unwrap();
        assert_relative_eq!(hull.volume, 60.0, max_relative = 1e-6);
        assert_relative_eq!(hull.area, 94.0, max_relative = 1e-6);

        let report = Report::measure(&moved, VolumeMethod::ConvexHull).unwrap();
        assert_eq!(
            report.to_string(),
            "Total Surface Area: 94.00 square units\nTotal Volume: 60.00 cubic units"
        );
    }
}

#[test]
fn shape_without_faces_reports_zero_area() {
    let shape = Shape::builder()
        .point("A", [0.0, 0.0, 0.0])
        .build()
        .unwrap();
    let area = SurfaceArea::new().execute(&shape).unwrap();
    assert_eq!(Measurement::new(area).to_string(), "0.00");
}
