//! # TUI Components
//!
//! All UI components for the terminal viewer.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: App name, tagline, status message
//! - `Guide`: Select → Learn → Implement footer
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose persistent state lives in `TuiState` and that are
//! wrapped by a transient render struct each frame:
//! - `CardGrid` / `CardGridState`: one card per catalog entry, emits selections
//! - `DetailPanel` / `DetailPanelState`: scrollable view of the selected entry
//!
//! Components never touch the `Selector` directly. They read props and
//! emit events; the event loop turns those into `core::Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── card_grid.rs     (Entry cards)
//! ├── detail_panel.rs  (Selected entry)
//! └── guide.rs         (Footer steps)
//! ```

pub mod card_grid;
pub mod detail_panel;
pub mod guide;
pub mod title_bar;

pub use card_grid::{CardEvent, CardGrid, CardGridState};
pub use detail_panel::{DetailPanel, DetailPanelState};
pub use guide::Guide;
pub use title_bar::TitleBar;
