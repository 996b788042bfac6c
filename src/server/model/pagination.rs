//! Page arithmetic for list endpoints.

use crate::{
    model::api::{ListParamsDto, PaginatedDto, PaginationDto},
    server::util::query::{parse_filter, parse_sort, FilterSpec, SortSpec},
};

/// Requested window of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    /// `0` means no limit.
    pub limit: u64,
}

impl PageRequest {
    /// Largest skip or limit the database accepts.
    pub const MAX: u64 = i64::MAX as u64;

    /// Builds a window with both values capped at [`Self::MAX`].
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip: skip.min(Self::MAX),
            limit: limit.min(Self::MAX),
        }
    }

    /// The same window with both values capped at [`Self::MAX`].
    pub fn clamped(&self) -> Self {
        Self::new(self.skip, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}

/// Parsed list query: window plus filter and sort clauses.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: PageRequest,
    pub filter: FilterSpec,
    pub sort: SortSpec,
}

impl ListQuery {
    pub fn from_dto(dto: ListParamsDto) -> Self {
        Self {
            page: PageRequest::new(dto.skip, dto.limit),
            filter: parse_filter(dto.filter.as_deref()),
            sort: parse_sort(dto.sort.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_records: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

impl Pagination {
    /// Computes page metadata from the total matching rows and the requested window.
    ///
    /// With a limit of `0` everything is on a single page.
    pub fn new(total_records: u64, page: &PageRequest) -> Self {
        let page = page.clamped();
        let (current_page, total_pages) = if page.limit > 0 {
            (
                (page.skip / page.limit).saturating_add(1),
                total_records.div_ceil(page.limit),
            )
        } else {
            (1, 1)
        };

        Self {
            total_records,
            per_page: page.limit,
            current_page,
            total_pages,
            next_page: (current_page < total_pages).then(|| current_page + 1),
            prev_page: (current_page > 1).then(|| current_page - 1),
        }
    }

    pub fn into_dto(self) -> PaginationDto {
        PaginationDto {
            total_records: self.total_records,
            per_page: self.per_page,
            current_page: self.current_page,
            total_pages: self.total_pages,
            next_page: self.next_page,
            prev_page: self.prev_page,
        }
    }
}

/// One page of domain models together with its pagination metadata.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// Converts every item with `From` and wraps them in the API envelope.
    pub fn into_dto<D: From<T>>(self) -> PaginatedDto<D> {
        PaginatedDto {
            data: self.data.into_iter().map(D::from).collect(),
            pagination: self.pagination.into_dto(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(skip: u64, limit: u64) -> PageRequest {
        PageRequest { skip, limit }
    }

    #[test]
    fn first_of_several_pages() {
        let p = Pagination::new(25, &page(0, 10));

        assert_eq!(p.current_page, 1);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.next_page, Some(2));
        assert_eq!(p.prev_page, None);
        assert_eq!(p.per_page, 10);
    }

    #[test]
    fn last_page_has_no_next() {
        let p = Pagination::new(25, &page(20, 10));

        assert_eq!(p.current_page, 3);
        assert_eq!(p.next_page, None);
        assert_eq!(p.prev_page, Some(2));
    }

    #[test]
    fn total_pages_is_ceiling_for_every_total() {
        for total in 0..50u64 {
            for limit in 1..8u64 {
                let p = Pagination::new(total, &page(0, limit));
                assert_eq!(p.total_pages, (total + limit - 1) / limit);
            }
        }
    }

    #[test]
    fn current_page_follows_skip() {
        assert_eq!(Pagination::new(100, &page(9, 10)).current_page, 1);
        assert_eq!(Pagination::new(100, &page(10, 10)).current_page, 2);
        assert_eq!(Pagination::new(100, &page(95, 10)).current_page, 10);
    }

    #[test]
    fn zero_limit_is_a_single_page() {
        let p = Pagination::new(42, &page(0, 0));

        assert_eq!(p.current_page, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.next_page, None);
        assert_eq!(p.prev_page, None);
    }

    #[test]
    fn parses_list_params() {
        let query = ListQuery::from_dto(ListParamsDto {
            skip: 5,
            limit: 0,
            sort: Some("name=desc".to_string()),
            filter: Some("active=true".to_string()),
        });

        assert_eq!(query.page, page(5, 0));
        assert_eq!(query.filter.len(), 1);
        assert_eq!(query.sort.len(), 1);
    }

    #[test]
    fn caps_window_at_database_range() {
        let request = PageRequest::new(u64::MAX, u64::MAX);

        assert_eq!(request.skip, i64::MAX as u64);
        assert_eq!(request.limit, i64::MAX as u64);
    }

    #[test]
    fn huge_skip_does_not_overflow() {
        let p = Pagination::new(3, &page(u64::MAX, 1));

        assert_eq!(p.current_page, i64::MAX as u64 + 1);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.next_page, None);
        assert_eq!(p.prev_page, Some(i64::MAX as u64));
    }
}
