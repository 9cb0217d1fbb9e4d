mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod search;
pub use search::SearchView;
