use std::ops::{Deref, DerefMut};

use crate::extraction::parseutil::clean_text;
use crate::extraction::pdf::tabulareader;

/// Raw cells of one extracted table, prior to normalization.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Table(pub Vec<Row>);

impl Table {
    /// Cleans leading, trailing, and redundant whitespace in every cell,
    /// in-place. Absent cells arrive from the wire as empty strings, so
    /// cleaning never invents data.
    pub fn clean(&mut self) {
        for row in self.0.iter_mut() {
            for cell in row.iter_mut() {
                clean_text(cell);
            }
        }
    }
}

impl Deref for Table {
    type Target = Vec<Row>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Table {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<tabulareader::JsonTable> for Table {
    fn from(value: tabulareader::JsonTable) -> Self {
        Table(value.data.into_iter().map(Into::into).collect())
    }
}

impl<C, R> From<C> for Table
where
    C: IntoIterator<Item = R>,
    R: Into<Row>,
{
    fn from(value: C) -> Self {
        Table(value.into_iter().map(Into::into).collect())
    }
}

/// One raw table row.
#[derive(Debug, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<tabulareader::JsonRow> for Row {
    fn from(value: tabulareader::JsonRow) -> Self {
        Row(value.0.into_iter().map(|cell| cell.text).collect())
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims_and_collapses_cells() {
        let mut table = Table::from([[" 10 ", "58\n", "ABBOTT  ST"]]);
        table.clean();
        assert_eq!(table, Table::from([["10", "58", "ABBOTT ST"]]));
    }
}
