use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, row, text};
use cosmic::Element;

use crate::message::Message;

/// Longest bar, in block cells.
const BAR_CELLS: usize = 24;

/// Bar chart of notes created per day: one row per date, bars scaled to the
/// busiest day. Rows keep the aggregator's first-seen order.
pub fn daily_chart(counts: &[(String, usize)]) -> Element<'static, Message> {
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(1);

    let mut col = column().spacing(4);
    col = col.push(text::title4(crate::fl!("chart-heading")));

    for (date, count) in counts {
        let cells = (count * BAR_CELLS).div_ceil(max);
        let bar: String = "\u{2587}".repeat(cells);
        col = col.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::caption(date.clone()).width(Length::Fixed(96.0)))
                .push(text::body(bar))
                .push(text::caption(count.to_string())),
        );
    }

    col.into()
}
