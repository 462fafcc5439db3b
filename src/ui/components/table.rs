// SPDX-License-Identifier: MPL-2.0
//! Simple data table: a header row followed by data rows.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{rule, Column, Row, Text};
use iced::{Element, Length};

fn row<'a, Message: 'a>(cells: &[String], size: f32) -> Row<'a, Message> {
    cells.iter().fold(Row::new().spacing(spacing::MD), |row, cell| {
        row.push(Text::new(cell.clone()).size(size).width(Length::FillPortion(1)))
    })
}

pub fn table<'a, Message: 'a>(headers: &[String], rows: &[Vec<String>]) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(row(headers, typography::BODY_LG))
        .push(rule::horizontal(2));

    for cells in rows {
        column = column.push(row(cells, typography::BODY));
    }

    column.into()
}
