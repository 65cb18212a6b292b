use crate::shared::BootcampError;
use std::str::FromStr;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validated page coordinates.
///
/// Construction fails immediately for a negative page or a size outside
/// `1..=100`; an invalid request never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u32,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, BootcampError> {
        if page < 0 {
            return Err(BootcampError::InvalidPage);
        }
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(BootcampError::InvalidPageSize);
        }
        Ok(Self {
            page: page as u64,
            size: size as u32,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(u64::from(self.size))
    }

    pub fn limit(&self) -> u32 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as u64,
            size: DEFAULT_PAGE_SIZE as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Name,
    CapacityCount,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortBy::Name),
            "capacitycount" | "capacity_count" => Ok(SortBy::CapacityCount),
            _ => Err(format!(
                "Invalid sort field: {}. Please specify 'name' or 'capacityCount'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(format!(
                "Invalid order: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

/// One page of results.
///
/// The number of pages is always derived from `total_elements` and `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    content: Vec<T>,
    page: u64,
    size: u32,
    total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.size))
    }
}
