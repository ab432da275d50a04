use crate::domain::Category;
use crate::store::ViewSnapshot;
use crate::ui::fade::FadeEngine;
use crate::ui::viewport::Viewport;

pub const TITLE: &str = "Nearby Public Toilets & Water Stations";
pub const LOADING: &str = "Loading nearby locations...";
pub const EMPTY: &str = "No locations found nearby.";

const HINTS: &str = "(t) toilets  (w) water  (j/k) scroll  (q) quit";

const TOILETS_BACKDROP: &str = "\
▄▄▄▄▄      ▄▄▄▄▄▄▄▄▄           ▄▄▄▄▄▄▄
███████▄▄▄▄█████████▄▄▄▄▄▄▄▄▄▄▄███████";

const WATER_BACKDROP: &str = "\
  ~~~~~        ~~~~~~~       ~~~~~
~~     ~~~~~~~~       ~~~~~~~     ~~~~";

/// Builds one complete frame. Pure so the layout is testable; the renderer
/// only decides when to call it and writes the result to the terminal.
pub fn render(snapshot: &ViewSnapshot, viewport: &Viewport, fades: &FadeEngine) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(TITLE.to_string());
    lines.push(String::new());

    if !snapshot.address.is_empty() {
        lines.push(format!("Your location: {}", snapshot.address));
        lines.push(String::new());
    }

    lines.push(selector(snapshot.category));
    lines.push(String::new());

    if snapshot.loading {
        lines.push(LOADING.to_string());
    } else if snapshot.places.is_empty() {
        lines.push(EMPTY.to_string());
    } else {
        lines.extend(cards(snapshot, viewport, fades));
    }

    lines.push(String::new());
    lines.push(HINTS.to_string());
    lines.push(format!("📶 {}", snapshot.connection));
    lines.push(String::new());
    lines.push(backdrop(snapshot.category).to_string());

    let mut frame = lines.join("\n");
    frame.push('\n');
    frame
}

fn selector(category: Category) -> String {
    match category {
        Category::Toilets => format!("[{}]  {}", Category::Toilets.label(), Category::DrinkingWater.label()),
        Category::DrinkingWater => format!(" {}  [{}]", Category::Toilets.label(), Category::DrinkingWater.label()),
    }
}

fn cards(snapshot: &ViewSnapshot, viewport: &Viewport, fades: &FadeEngine) -> Vec<String> {
    let card_rows = viewport.card_rows();
    let content_rows = snapshot.places.len() * card_rows;
    let rows = viewport.rows().min(content_rows.saturating_sub(viewport.offset()));

    (0..rows)
        .map(|row| {
            let content_row = viewport.offset() + row;
            let card = content_row / card_rows;
            let place = &snapshot.places[card];

            let line = match content_row % card_rows {
                0 => place.display_name.clone(),
                1 => format!("Type: {}", place.kind.as_deref().unwrap_or("")),
                _ => String::new(),
            };

            styled(&line, fades.opacity(card))
        })
        .collect()
}

/// Maps an opacity onto the terminal's grayscale ramp. Fully transparent
/// lines render blank, fully opaque ones unstyled.
fn styled(line: &str, opacity: f32) -> String {
    if line.is_empty() || opacity >= 1.0 {
        return line.to_string();
    }
    if opacity <= 0.0 {
        return String::new();
    }

    let shade = 232 + (opacity * 23.0).round() as u8;
    format!("\x1b[38;5;{}m{}\x1b[0m", shade, line)
}

fn backdrop(category: Category) -> &'static str {
    match category {
        Category::Toilets => TOILETS_BACKDROP,
        Category::DrinkingWater => WATER_BACKDROP,
    }
}
