use crate::error::{DocPagerError, Result};
use crate::types::Page;
use tracing::debug;

/// Soft ceiling on accumulated page length, in characters, when the caller
/// does not supply one.
pub const DEFAULT_MAX_PAGE_LENGTH: usize = 5000;

/// Greedy single-pass packer: accumulates text units into pages, closing a
/// page as soon as its accumulated character length reaches the maximum.
///
/// The bound is checked before each unit is appended, not enforced as a hard
/// ceiling, so a page may overshoot the maximum by at most the length of its
/// final unit. Units are atomic and never split across pages.
#[derive(Debug)]
pub struct Paginator {
    max_page_length: usize,
    filter_empty: bool,
}

impl Paginator {
    pub fn new(max_page_length: usize) -> Result<Self> {
        if max_page_length == 0 {
            return Err(DocPagerError::PaginateConfig {
                reason: "maximum page length must be greater than 0".to_string(),
            });
        }

        Ok(Self {
            max_page_length,
            filter_empty: false,
        })
    }

    /// Drop units that are blank after trimming before packing. Off by
    /// default: the plain-text normalizer path keeps blank lines and some
    /// callers want them preserved in the output.
    pub fn filter_empty(mut self, filter: bool) -> Self {
        self.filter_empty = filter;
        self
    }

    pub fn max_page_length(&self) -> usize {
        self.max_page_length
    }

    /// Pack units into pages in input order.
    ///
    /// The final page is always emitted, even when it is empty: an empty
    /// input sequence yields exactly one empty page. Concatenating the units
    /// of all pages reproduces the input sequence exactly (minus any units
    /// removed by [`filter_empty`](Self::filter_empty)).
    pub fn paginate(&self, units: Vec<String>) -> Vec<Page> {
        let mut pages: Vec<Page> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut page_len = 0usize;

        for unit in units {
            if self.filter_empty && unit.trim().is_empty() {
                continue;
            }

            if page_len >= self.max_page_length {
                pages.push(Page {
                    number: pages.len() + 1,
                    units: std::mem::take(&mut current),
                });
                page_len = 0;
            }

            page_len += unit.chars().count();
            current.push(unit);
        }

        pages.push(Page {
            number: pages.len() + 1,
            units: current,
        });

        debug!(
            "Packed {} pages with maximum length {}",
            pages.len(),
            self.max_page_length
        );

        pages
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            max_page_length: DEFAULT_MAX_PAGE_LENGTH,
            filter_empty: false,
        }
    }
}
