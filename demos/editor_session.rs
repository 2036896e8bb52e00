//! Geomark Editor Session — scripted drive of the polygon editing kernel.
//!
//! Plays the interaction sequence a globe viewer would forward (presses,
//! drags, right-clicks, mode buttons) and prints the polygon listing in
//! lat/lon degrees after each step, standing in for the viewer's
//! coordinate panel.
//!
//! Usage:
//! ```text
//! cargo run --example editor_session
//! ```

use geomark::editing::{Editor, PickHit, PressOutcome};
use geomark::geodesy::Geodetic;
use geomark::math::Point3;
use geomark::scene::PolygonPhase;

fn main() -> geomark::Result<()> {
    // Default: WARN for everything, INFO for the session driver.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geomark=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("editor_session=info".parse().unwrap_or_default())
        .add_directive("geomark=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut editor = Editor::new();

    // Draw a quadrilateral over Victoria Harbour, one press per corner.
    editor.start_drawing()?;
    for &(lon, lat) in &[
        (114.1550, 22.2980),
        (114.1560, 22.2980),
        (114.1560, 22.2990),
        (114.1550, 22.2990),
    ] {
        let ground = Geodetic::from_degrees(lon, lat, 0.0).to_cartesian();
        let outcome = editor.press(PickHit::Miss, Some(ground))?;
        println!("press -> {outcome:?}");
    }
    let committed = editor.finish_drawing()?;
    println!("saved -> {committed:?}");
    print_listing(&editor);

    // Reopen it, refine the outline with one more press, drag a corner,
    // and delete another with a right-click.
    if let Some(id) = committed {
        editor.select(id)?;
        editor.edit_selected()?;

        let ground = Geodetic::from_degrees(114.1555, 22.2978, 0.0).to_cartesian();
        let outcome = editor.press(PickHit::Miss, Some(ground))?;
        println!("refine -> {outcome:?}");

        editor.press(
            PickHit::Corner {
                polygon: id,
                corner: 0,
            },
            None,
        )?;
        let dragged = Geodetic::from_degrees(114.1548, 22.2979, 0.0).to_cartesian();
        editor.drag_to(dragged)?;
        editor.release();

        let removed = editor.remove_corner(PickHit::Corner {
            polygon: id,
            corner: 2,
        })?;
        println!("right-click removed -> {removed:?}");

        editor.finish_drawing()?;
        print_listing(&editor);

        editor.remove_last()?;
        println!("removed last polygon");
        print_listing(&editor);
    }

    Ok(())
}

/// Prints every polygon's vertices as lat/lon degrees, most recent last.
fn print_listing(editor: &Editor) {
    let scene = editor.scene();
    println!("-- {} polygon(s) --", scene.len());
    for (index, (id, data)) in scene.iter().enumerate() {
        let phase = match data.phase {
            PolygonPhase::Draft => "draft",
            PolygonPhase::Committed => "committed",
        };
        println!("Polygon {} ({phase}, {id:?}):", index + 1);
        for point in data.boundary.points() {
            print_vertex(point);
        }
    }
}

fn print_vertex(point: &Point3) {
    let geo = Geodetic::from_cartesian(point);
    let lat = geo.latitude_degrees();
    let lon = geo.longitude_degrees();
    println!("  Lat: {lat:.6}, Lon: {lon:.6}");
}
