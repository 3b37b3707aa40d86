use crate::settings::Settings;
use memoreto_core::{Coord2, GameSession};

// SGR color codes
const HEADER: &str = "36;1";
const GRID: &str = "90";
const HIDDEN: &str = "90";
const MATCHED: &str = "35;1";
const SELECTED: &str = "33;1";
pub const SUCCESS: &str = "32;1";
pub const FAIL: &str = "31;1";

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn paint(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Renders the grid as plain text, one turn's snapshot. `flips` are the
/// cells currently face-up awaiting judgement; matched cells come from the
/// session itself. Pure string building, no terminal calls.
pub fn render(session: &GameSession, flips: &[Coord2], settings: &Settings) -> String {
    let size = session.size();
    let color = settings.color_enabled;
    let mut out = String::new();

    let columns: Vec<String> = (0..size)
        .map(|col| paint(&format!("{col:^3}"), HEADER, color))
        .collect();
    out.push_str("    ");
    out.push_str(&columns.join(" "));
    out.push('\n');

    out.push_str("  ");
    out.push_str(&paint(&border(size, '┌', '┬', '┐'), GRID, color));
    out.push('\n');

    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| {
                let coords = (row, col);
                if let memoreto_core::CardCell::Matched(symbol) = session.card_at(coords) {
                    paint(&format!("{symbol:^3}"), MATCHED, color)
                } else if flips.contains(&coords) {
                    paint(&format!("{:^3}", session.symbol_at(coords)), SELECTED, color)
                } else {
                    paint(" ■ ", HIDDEN, color)
                }
            })
            .collect();

        let pipe = paint("│", GRID, color);
        out.push_str(&paint(&format!("{row} "), HEADER, color));
        out.push_str(&pipe);
        out.push_str(&cells.join(&pipe));
        out.push_str(&pipe);
        out.push('\n');

        if row != size - 1 {
            out.push_str("  ");
            out.push_str(&paint(&border(size, '├', '┼', '┤'), GRID, color));
            out.push('\n');
        }
    }

    out.push_str("  ");
    out.push_str(&paint(&border(size, '└', '┴', '┘'), GRID, color));
    out.push('\n');

    out.push_str(&format!(
        "Moves: {}   Pairs: {}/{}\n",
        session.move_count(),
        session.pairs_matched(),
        session.pair_count()
    ));
    out
}

fn border(size: memoreto_core::Coord, left: char, mid: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for col in 0..size {
        out.push_str("───");
        out.push(if col == size - 1 { right } else { mid });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoreto_core::Board;

    fn plain_settings() -> Settings {
        Settings {
            color_enabled: false,
            ..Default::default()
        }
    }

    fn session() -> GameSession {
        let board = Board::from_rows(&[&['A', 'B'], &['B', 'A']]).unwrap();
        GameSession::new(board)
    }

    #[test]
    fn fresh_board_renders_all_cells_hidden() {
        let rendered = render(&session(), &[], &plain_settings());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "     0   1 ");
        assert_eq!(lines[1], "  ┌───┬───┐");
        assert_eq!(lines[2], "0 │ ■ │ ■ │");
        assert_eq!(lines[3], "  ├───┼───┤");
        assert_eq!(lines[4], "1 │ ■ │ ■ │");
        assert_eq!(lines[5], "  └───┴───┘");
        assert_eq!(lines[6], "Moves: 0   Pairs: 0/2");
    }

    #[test]
    fn matched_cells_show_their_symbol() {
        let mut session = session();
        session.select_pair((0, 0), (1, 1)).unwrap();

        let rendered = render(&session, &[], &plain_settings());

        assert!(rendered.contains("0 │ A │ ■ │"));
        assert!(rendered.contains("1 │ ■ │ A │"));
        assert!(rendered.contains("Moves: 1   Pairs: 1/2"));
    }

    #[test]
    fn flipped_selection_previews_face_up() {
        let session = session();
        let rendered = render(&session, &[(0, 1)], &plain_settings());

        assert!(rendered.contains("0 │ ■ │ B │"));
    }

    #[test]
    fn color_wraps_cells_in_sgr_sequences() {
        let settings = Settings::default();
        assert!(settings.color_enabled);

        let rendered = render(&session(), &[], &settings);

        assert!(rendered.contains("\x1b[90m ■ \x1b[0m"));
        assert!(!paint("x", SUCCESS, false).contains('\x1b'));
    }
}
