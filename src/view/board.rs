use crate::model::{
    BOARD_SIZE, BULL_INNER_RADIUS, BULL_OUTER_RADIUS, Band, CENTER, DOUBLE_OUTER_RADIUS,
    INNER_BULL, OUTER_BULL, RIM_NUMBER_RADIUS, SECTOR_ANGLE_DEG, SECTOR_ORDER, ThrowCode,
    point_at, wedge_start_angle,
};
use maud::{Markup, html};

struct WedgeCell {
    d: String,
    fill: &'static str,
    code: ThrowCode,
}

/// Donut sector path from inner radius `r1` to outer `r2` between angles
/// `a0..a1` in degrees.
fn donut_slice(r1: f64, r2: f64, a0: f64, a1: f64) -> String {
    let (x1o, y1o) = point_at(r2, a0);
    let (x2o, y2o) = point_at(r2, a1);
    let (x2i, y2i) = point_at(r1, a1);
    let (x1i, y1i) = point_at(r1, a0);
    let large = i32::from(a1 - a0 > 180.0);
    format!(
        "M {x1o} {y1o} A {r2} {r2} 0 {large} 1 {x2o} {y2o} L {x2i} {y2i} A {r1} {r1} 0 {large} 0 {x1i} {y1i} Z"
    )
}

fn wedge_cells(index: usize, sector: u8) -> Vec<WedgeCell> {
    let start = wedge_start_angle(index);
    let end = start + SECTOR_ANGLE_DEG;
    let alternate = index % 2 == 0;
    let single_fill = if alternate { "#1a1a1a" } else { "#e7e3c6" };
    let ring_fill = if alternate { "#c81e1e" } else { "#1f8a3a" };
    Band::ALL
        .iter()
        .filter_map(|band| {
            let (r1, r2) = band.radii();
            let fill = match band {
                Band::InnerSingle | Band::OuterSingle => single_fill,
                Band::Triple | Band::Double => ring_fill,
            };
            let code = ThrowCode::from_target(band.multiplier(), sector).ok()?;
            Some(WedgeCell {
                d: donut_slice(r1, r2, start, end),
                fill,
                code,
            })
        })
        .collect()
}

fn throw_url(match_id: &str, code: ThrowCode, view: &str) -> String {
    format!("/play/throw?match={match_id}&code={}&view={view}", code.value())
}

/// Clickable dartboard. Every region posts its throw code; the bulls are
/// drawn after the wedges so they sit on top, matching the hit rules.
#[must_use]
pub fn render_board(match_id: &str) -> Markup {
    html! {
        svg class="board" role="img" aria-label="Dartboard"
            viewBox=(format!("0 0 {BOARD_SIZE} {BOARD_SIZE}"))
            hx-target="#play-root" hx-swap="outerHTML" hx-sync="this:drop" {
            circle class="board-backing" cx=(CENTER) cy=(CENTER)
                r=(DOUBLE_OUTER_RADIUS + 8.0) {}
            @for (index, &sector) in SECTOR_ORDER.iter().enumerate() {
                @for cell in wedge_cells(index, sector) {
                    path d=(cell.d) fill=(cell.fill) stroke="#111827" stroke-width="1"
                        cursor="pointer" hx-post=(throw_url(match_id, cell.code, "board")) {}
                }
                @let mid = wedge_start_angle(index) + SECTOR_ANGLE_DEG / 2.0;
                @let (nx, ny) = point_at(RIM_NUMBER_RADIUS, mid);
                text class="board-number" x=(nx) y=(ny) text-anchor="middle"
                    dominant-baseline="middle" { (sector) }
            }
            circle class="board-bull-outer" cx=(CENTER) cy=(CENTER) r=(BULL_OUTER_RADIUS)
                cursor="pointer" hx-post=(throw_url(match_id, OUTER_BULL, "board")) {}
            circle class="board-bull-inner" cx=(CENTER) cy=(CENTER) r=(BULL_INNER_RADIUS)
                cursor="pointer" hx-post=(throw_url(match_id, INNER_BULL, "board")) {}
        }
    }
}

/// Button-per-region alternative to the board for small screens.
#[must_use]
pub fn render_throw_grid(match_id: &str) -> Markup {
    html! {
        div class="throw-grid" hx-target="#play-root" hx-swap="outerHTML" hx-sync="this:drop" {
            @for code in ThrowCode::all() {
                button class=(format!("throw-btn {}", grid_class(code)))
                    hx-post=(throw_url(match_id, code, "grid")) { (code.label()) }
            }
        }
    }
}

fn grid_class(code: ThrowCode) -> &'static str {
    match code.value() {
        1..=20 => "throw-single",
        21..=40 => "throw-double",
        41..=60 => "throw-triple",
        _ => "throw-bull",
    }
}
