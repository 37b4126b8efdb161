use crate::game::{Cell, GameEngine, Seat};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Colour used to draw a seat's pieces.
///
/// Player labels that name a terminal colour (`red`, `lightblue`, `#ff8800`)
/// are drawn in that colour; anything else falls back to red / yellow.
pub fn seat_color(engine: &GameEngine, seat: Seat) -> Color {
    engine
        .player(seat)
        .label()
        .parse::<Color>()
        .unwrap_or(match seat {
            Seat::First => Color::Red,
            Seat::Second => Color::Yellow,
        })
}

/// Render the rows of the board as styled lines, each prefixed and suffixed
/// with the given border strings.
pub fn board_lines(
    engine: &GameEngine,
    prefix: &'static str,
    suffix: &'static str,
) -> Vec<Line<'static>> {
    let colors = [
        seat_color(engine, Seat::First),
        seat_color(engine, Seat::Second),
    ];
    engine
        .board()
        .rows()
        .map(|row| {
            let mut spans = vec![Span::raw(prefix)];
            spans.extend(row.iter().map(|&cell| {
                let (symbol, color) = match cell {
                    Cell::Empty => (" . ", Color::DarkGray),
                    Cell::Occupied(seat) => (" \u{25cf} ", colors[seat.index()]),
                };
                Span::styled(symbol, Style::default().fg(color))
            }));
            spans.push(Span::raw(suffix));
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_named_colors_are_used() {
        let engine = GameEngine::new(Player::new("blue"), Player::new("green"));
        assert_eq!(seat_color(&engine, Seat::First), Color::Blue);
        assert_eq!(seat_color(&engine, Seat::Second), Color::Green);
    }

    #[test]
    fn test_unknown_labels_fall_back_per_seat() {
        let engine = GameEngine::new(Player::new("Alice"), Player::new("Bob"));
        assert_eq!(seat_color(&engine, Seat::First), Color::Red);
        assert_eq!(seat_color(&engine, Seat::Second), Color::Yellow);
    }

    #[test]
    fn test_one_line_per_row() {
        let mut engine = GameEngine::new(Player::new("red"), Player::new("yellow"));
        engine.drop_piece(0).unwrap();
        let lines = board_lines(&engine, "|", "|");
        assert_eq!(lines.len(), 6);
        // prefix + 7 cells + suffix
        assert_eq!(lines[5].spans.len(), 9);
        assert_eq!(lines[5].spans[1].content, " \u{25cf} ");
        assert_eq!(lines[0].spans[1].content, " . ");
    }
}
