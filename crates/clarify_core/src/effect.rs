/// Side effects requested by [`crate::update`] and executed by the app
/// layer. The core never performs IO itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCatalog,
    SelectBook {
        book_id: String,
    },
    DispatchQuery {
        query: String,
        page_number: Option<String>,
        image_mode: bool,
    },
}
