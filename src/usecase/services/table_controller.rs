use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::entities::movie::{MovieRecord, TITLE_COLUMN};
use crate::domain::entities::sort::{SortDirection, SortEvent};
use crate::usecase::ports::provider::{MovieProvider, ProviderError};

pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: usize,
    pub values: Vec<String>,
}

pub struct TableController {
    provider: Arc<dyn MovieProvider>,
    columns: Vec<String>,
    original: Vec<MovieRecord>,
    working: Vec<MovieRecord>,
    filter_text: String,
    sort_states: Vec<SortDirection>,
    page: usize,
    page_size: usize,
}

impl TableController {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self::with_page_size(provider, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(provider: Arc<dyn MovieProvider>, page_size: usize) -> Self {
        Self {
            provider,
            columns: Vec::new(),
            original: Vec::new(),
            working: Vec::new(),
            filter_text: String::new(),
            sort_states: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn reload(&mut self) -> Result<usize, ProviderError> {
        let table = self.provider.fetch_all()?;
        let count = table.record_count();
        self.sort_states = vec![SortDirection::None; table.columns.len()];
        self.columns = table.columns;
        self.working = table.records.clone();
        self.original = table.records;
        self.filter_text = String::new();
        self.page = 1;
        Ok(count)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.working.len()
    }

    pub fn page_count(&self) -> usize {
        self.working.len().div_ceil(self.page_size)
    }

    pub fn sort_direction(&self, column_idx: usize) -> SortDirection {
        self.sort_states
            .get(column_idx)
            .copied()
            .unwrap_or_default()
    }

    pub fn active_sort(&self) -> Option<(usize, SortDirection)> {
        self.sort_states
            .iter()
            .copied()
            .enumerate()
            .find(|(_, direction)| direction.is_active())
    }

    // Always recomputed from the immutable original so successive filters
    // never compound.
    pub fn set_filter(&mut self, text: &str) {
        self.filter_text = text.to_string();
        self.working = filter_records(&self.columns, &self.original, &self.filter_text);
    }

    pub fn activate_sort(&mut self, column_idx: usize) -> Option<SortEvent> {
        let column = self.columns.get(column_idx)?.clone();
        let direction = self.sort_direction(column_idx).rotate();
        for state in &mut self.sort_states {
            *state = SortDirection::None;
        }
        self.sort_states[column_idx] = direction;
        Some(SortEvent { column, direction })
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn page_view(&self) -> Vec<DisplayRow> {
        if self.working.is_empty() {
            return Vec::new();
        }

        let ordered = match self.active_sort() {
            Some((column_idx, direction)) => sorted_view(&self.working, column_idx, direction),
            None => self.working.iter().collect(),
        };

        let start = (self.page - 1) * self.page_size;
        ordered
            .into_iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .map(|(position, record)| DisplayRow {
                id: position + 1,
                values: record.values().to_vec(),
            })
            .collect()
    }
}

pub fn filter_records(
    columns: &[String],
    records: &[MovieRecord],
    filter_text: &str,
) -> Vec<MovieRecord> {
    let term = filter_text.to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }

    let Some(title_idx) = columns.iter().position(|column| column == TITLE_COLUMN) else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|record| {
            record
                .value(title_idx)
                .map(|title| title.to_lowercase().contains(&term))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

pub fn sorted_view(
    records: &[MovieRecord],
    column_idx: usize,
    direction: SortDirection,
) -> Vec<&MovieRecord> {
    let mut view: Vec<&MovieRecord> = records.iter().collect();
    if !direction.is_active() {
        return view;
    }

    view.sort_by(|a, b| {
        let ordering = compare_records(a, b, column_idx);
        match direction {
            SortDirection::Descending => ordering.reverse(),
            _ => ordering,
        }
    });
    view
}

fn compare_records(a: &MovieRecord, b: &MovieRecord, column_idx: usize) -> Ordering {
    match (a.value(column_idx), b.value(column_idx)) {
        (Some(left), Some(right)) => compare_cells(left, right),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_numeric_value(a), parse_numeric_value(b)) {
        (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

pub fn parse_numeric_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', "").parse::<f64>().ok()
}
