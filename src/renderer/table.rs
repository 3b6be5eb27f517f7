//! Scoreboard table
//!
//! One row per visit: visit number, remaining, and three dart cells. Rendered
//! as HTML for the browser and as plain text for the terminal.

use maud::{Markup, html};

use crate::game::{Scoreboard, Slot, SlotOutcome, THROWS_PER_VISIT, Visit};

/// Full `<table>` including the header row
#[must_use]
pub fn render_table(scoreboard: &Scoreboard) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th style="width: 25%" { "Visit" }
                    th style="width: 25%" { "Remaining" }
                    th style="width: 50%" colspan=(THROWS_PER_VISIT) { "Darts" }
                }
            }
            (render_body(scoreboard))
        }
    }
}

/// `<tbody>` with one row per visit
#[must_use]
pub fn render_body(scoreboard: &Scoreboard) -> Markup {
    html! {
        tbody {
            @for visit in &scoreboard.visits {
                (render_row(visit))
            }
        }
    }
}

fn render_row(visit: &Visit) -> Markup {
    let row_class = if visit.is_checkout() {
        Some("checkout")
    } else if visit.is_bust() {
        Some("bust")
    } else {
        None
    };

    html! {
        tr class=[row_class] {
            td { (visit.number()) }
            td { (visit.remaining) }
            @for i in 0..THROWS_PER_VISIT {
                @if let Some(slot) = visit.slots.get(i) {
                    td class=[cell_class(slot)] { (slot.to_string()) }
                } @else {
                    td {}
                }
            }
        }
    }
}

/// Space-separated cell classes, None for a plain scoring dart
fn cell_class(slot: &Slot) -> Option<String> {
    let mut classes = Vec::new();
    if slot.on_double {
        classes.push("on-double");
    }
    match slot.outcome {
        SlotOutcome::Floor => classes.push("floor"),
        SlotOutcome::Bust => classes.push("bust"),
        SlotOutcome::Checkout => classes.push("checkout"),
        SlotOutcome::Scored => {}
    }
    (!classes.is_empty()).then(|| classes.join(" "))
}

/// Plain-text table for terminal output
pub fn render_text(scoreboard: &Scoreboard) -> String {
    let mut out = format!("{:>5}  {:>9}  Darts\n", "Visit", "Remaining");
    for visit in &scoreboard.visits {
        let cells: String = visit
            .slots
            .iter()
            .map(|slot| format!(" {:<12}", slot.to_string()))
            .collect();
        let row = format!("{:>5}  {:>9} {cells}", visit.number(), visit.remaining);
        out.push_str(row.trim_end());
        out.push('\n');
    }
    if scoreboard.finished {
        out.push_str(&format!(
            "Checked out in {} darts\n",
            scoreboard.darts_thrown()
        ));
    } else {
        out.push_str(&format!("{} remaining\n", scoreboard.remaining));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::derive;
    use crate::notation::parse;

    fn board(tokens: &[&str], start: u32) -> Scoreboard {
        derive(tokens.iter().map(|t| parse(t).unwrap()), start)
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(
            render_body(&board(&[], 301)).into_string(),
            "<tbody></tbody>"
        );
    }

    #[test]
    fn test_rows() {
        let html = render_body(&board(&["t20", "f"], 301)).into_string();
        assert_eq!(
            html,
            "<tbody><tr><td>1</td><td>241</td><td>T20</td>\
             <td class=\"floor\">FLOOR</td><td></td></tr></tbody>"
        );
    }

    #[test]
    fn test_checkout_row() {
        let html = render_body(&board(&["d16"], 32)).into_string();
        assert!(html.contains("<tr class=\"checkout\">"));
        assert!(html.contains("<td class=\"on-double checkout\">D16 (OUT)</td>"));
    }

    #[test]
    fn test_bust_row() {
        let html = render_body(&board(&["20", "19"], 40)).into_string();
        assert_eq!(
            html,
            "<tbody><tr class=\"bust\"><td>1</td><td>40</td>\
             <td class=\"on-double\">S20</td>\
             <td class=\"on-double bust\">S19 (BUST)</td><td></td></tr></tbody>"
        );
    }

    #[test]
    fn test_text() {
        let text = render_text(&board(&["t20", "t20", "t20", "d20"], 181));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Visit  Remaining  Darts");
        assert_eq!(lines[1], "    1        181  T20          T20          T20 (BUST)");
        assert_eq!(lines[2], "    2        141  D20");
        assert_eq!(lines[3], "141 remaining");
    }

    #[test]
    fn test_table_header() {
        let html = render_table(&board(&["20"], 301)).into_string();
        assert!(html.starts_with("<table><thead><tr><th style=\"width: 25%\">Visit</th>"));
        assert!(html.contains("colspan=\"3\">Darts</th>"));
        assert!(html.contains("<td>281</td>"));
        assert!(html.ends_with("</tbody></table>"));
    }
}
