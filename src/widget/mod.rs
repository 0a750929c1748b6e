//! The widget shell: lifecycle, failure state, focus, and store sync.
//!
//! `GridField` owns the live grid exclusively. Construction and reload
//! never panic: build failures are captured and queryable via `failed()`
//! / `fail_message()`, and the widget exposes no surface while failed.
//! All operations are synchronous; a reload fully replaces the prior grid
//! before any subsequent read.

mod store;

pub use store::{MemoryStore, ValueStore};
#[cfg(target_arch = "wasm32")]
pub use store::TextAreaStore;

use crate::builder;
use crate::config::{Geometry, GridConfig};
use crate::error::{GridFieldError, Result};
use crate::mutation;
use crate::render;
use crate::serialize;
use crate::types::Grid;

/// Opaque renderable handle for the widget's current state.
///
/// Hosts mount or print the markup; they never reach into the grid
/// through it.
#[derive(Debug, Clone)]
pub struct Surface {
    html: String,
}

impl Surface {
    /// The rendered table (plus row controls for dynamic grids).
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

enum State {
    Built {
        geometry: Geometry,
        grid: Grid,
        surface: Surface,
    },
    Failed {
        error: GridFieldError,
    },
    Destroyed,
}

/// The grid-editing widget.
///
/// Bound to a host-owned `ValueStore` holding the serialized value, and
/// built from a plain configuration object.
pub struct GridField<S: ValueStore> {
    store: S,
    config: GridConfig,
    state: State,
    focused: Option<(usize, usize)>,
}

impl<S: ValueStore> GridField<S> {
    /// Construct the widget from `(store, initial value, configuration)`.
    ///
    /// Never fails outright: check `failed()` afterwards. A failed widget
    /// exposes no surface and stays failed until `reload()` with
    /// corrected inputs.
    pub fn new(store: S, initial_value: &str, config: GridConfig) -> Self {
        let state = build_state(&config, initial_value);
        GridField {
            store,
            config,
            state,
            focused: None,
        }
    }

    /// Whether the last build attempt failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        matches!(self.state, State::Failed { .. })
    }

    /// Failure identifier for the host's fallback rendering
    /// (`"MissingParameter"` or `"InvalidSerialization"`).
    #[must_use]
    pub fn fail_message(&self) -> Option<&'static str> {
        match &self.state {
            State::Failed { error } => Some(error.identifier()),
            _ => None,
        }
    }

    /// Human-readable failure detail for diagnostics.
    #[must_use]
    pub fn fail_detail(&self) -> Option<String> {
        match &self.state {
            State::Failed { error } => Some(error.to_string()),
            _ => None,
        }
    }

    /// The renderable surface, or `None` when failed or destroyed.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        match &self.state {
            State::Built { surface, .. } => Some(surface),
            _ => None,
        }
    }

    /// The live grid, for host-side inspection.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        match &self.state {
            State::Built { grid, .. } => Some(grid),
            _ => None,
        }
    }

    /// The bound store (host side of the sync contract).
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the bound store, for hosts that correct its
    /// content before requesting a reload.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Write the current serialization into the bound store.
    ///
    /// Side effect only; a no-op while failed or destroyed.
    pub fn sync(&mut self) {
        if let State::Built { grid, .. } = &self.state {
            let wire = serialize::to_wire(grid);
            self.store.write(&wire);
        }
    }

    /// Discard the grid and rebuild wholesale from the store's current
    /// value and the original configuration.
    ///
    /// Clears a prior failed state when the store now holds valid input;
    /// enters the failed state when it does not. Focus does not survive a
    /// reload.
    pub fn reload(&mut self) {
        let value = self.store.read();
        self.state = build_state(&self.config, &value);
        self.focused = None;
    }

    /// True iff an editable cell currently holds input focus.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Note that the cell at `(row, display_col)` received focus.
    ///
    /// Returns `false` (and records nothing) unless the address names an
    /// editable data cell of the live grid.
    pub fn focus_cell(&mut self, row: usize, display_col: usize) -> bool {
        let editable = self
            .grid()
            .and_then(|g| g.cell(row, display_col))
            .is_some_and(crate::types::Cell::is_editable);
        if editable {
            self.focused = Some((row, display_col));
        } else {
            self.focused = None;
        }
        editable
    }

    /// Note that cell focus was lost.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Reserved hook for host layout passes.
    pub fn resize(&mut self) {}

    /// Sync once, then release the surface. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if matches!(self.state, State::Built { .. }) {
            self.sync();
        }
        self.state = State::Destroyed;
        self.focused = None;
    }

    /// Apply a cell edit (the DOM-agnostic editable-cell event).
    ///
    /// # Errors
    /// `EditRejected` for locked cells, label cells, out-of-range
    /// addresses, or a widget that is not built.
    pub fn commit_edit(&mut self, row: usize, display_col: usize, value: &str) -> Result<()> {
        let State::Built {
            geometry,
            grid,
            surface,
        } = &mut self.state
        else {
            return Err(GridFieldError::EditRejected(
                "widget is not built".to_string(),
            ));
        };
        mutation::apply_cell_edit(grid, row, display_col, value)?;
        surface.html = render::render_surface(grid, geometry);
        Ok(())
    }

    /// Append a row (dynamic grids only).
    ///
    /// # Errors
    /// `EditRejected` on static grids or a widget that is not built.
    pub fn add_row(&mut self) -> Result<()> {
        let State::Built {
            geometry,
            grid,
            surface,
        } = &mut self.state
        else {
            return Err(GridFieldError::EditRejected(
                "widget is not built".to_string(),
            ));
        };
        mutation::add_row(grid)?;
        surface.html = render::render_surface(grid, geometry);
        Ok(())
    }

    /// Remove the last row, never going below the configured minimum.
    /// Returns whether a row was removed.
    ///
    /// # Errors
    /// `EditRejected` on static grids or a widget that is not built.
    pub fn remove_row(&mut self) -> Result<bool> {
        let State::Built {
            geometry,
            grid,
            surface,
        } = &mut self.state
        else {
            return Err(GridFieldError::EditRejected(
                "widget is not built".to_string(),
            ));
        };
        let removed = mutation::remove_row(grid)?;
        if removed {
            // Removing the focused row's cell would leave a dangling
            // focus address.
            if let Some((row, _)) = self.focused {
                if row >= grid.row_count() {
                    self.focused = None;
                }
            }
            surface.html = render::render_surface(grid, geometry);
        }
        Ok(removed)
    }

    /// Whether the remove affordance should currently be enabled.
    #[must_use]
    pub fn can_remove_row(&self) -> bool {
        self.grid().is_some_and(Grid::can_remove_row)
    }

    /// Current canonical serialization, without touching the store.
    #[must_use]
    pub fn serialized(&self) -> Option<String> {
        self.grid().map(serialize::to_wire)
    }
}

fn build_state(config: &GridConfig, value: &str) -> State {
    let built = Geometry::interpret(config)
        .and_then(|geometry| builder::build(&geometry, value).map(|grid| (geometry, grid)));
    match built {
        Ok((geometry, grid)) => {
            let surface = Surface {
                html: render::render_surface(&grid, &geometry),
            };
            State::Built {
                geometry,
                grid,
                surface,
            }
        }
        Err(error) => State::Failed { error },
    }
}

// ============================================================================
// WASM32 wrapper
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, HtmlTextAreaElement};

    use super::{GridField, TextAreaStore};
    use crate::config::GridConfig;

    /// The widget as mounted in a page.
    ///
    /// Renders into `container` and stays bound to `textarea` for
    /// value sync. DOM event wiring (input/focus/blur delegation and the
    /// row-control buttons) lives in the thin JS wrapper, which forwards
    /// through the exported methods.
    #[wasm_bindgen]
    pub struct GridFieldElement {
        inner: GridField<TextAreaStore>,
        container: HtmlElement,
    }

    #[wasm_bindgen]
    impl GridFieldElement {
        /// Build the widget from the textarea's current value and a plain
        /// configuration object, and mount it into the container.
        ///
        /// Construction itself only fails on an unreadable configuration
        /// object; grid build failures are queryable via `failed()`.
        #[wasm_bindgen(constructor)]
        pub fn new(
            textarea: HtmlTextAreaElement,
            container: HtmlElement,
            config: JsValue,
        ) -> Result<GridFieldElement, JsValue> {
            console_error_panic_hook::set_once();

            let config: GridConfig = serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("configuration: {e}")))?;
            let initial = textarea.value();
            let inner = GridField::new(TextAreaStore::new(textarea), &initial, config);

            let widget = GridFieldElement { inner, container };
            widget.mount();
            Ok(widget)
        }

        fn mount(&self) {
            match self.inner.surface() {
                Some(surface) => self.container.set_inner_html(surface.html()),
                None => self.container.set_inner_html(""),
            }
        }

        pub fn failed(&self) -> bool {
            self.inner.failed()
        }

        pub fn fail_message(&self) -> Option<String> {
            self.inner.fail_message().map(str::to_string)
        }

        /// Forward an input event from a cell.
        pub fn commit_edit(
            &mut self,
            row: usize,
            display_col: usize,
            value: &str,
        ) -> Result<(), JsValue> {
            // The input element already shows the text; no remount, which
            // would drop focus mid-typing.
            self.inner.commit_edit(row, display_col, value)?;
            Ok(())
        }

        pub fn add_row(&mut self) -> Result<(), JsValue> {
            self.inner.add_row()?;
            self.mount();
            Ok(())
        }

        pub fn remove_row(&mut self) -> Result<bool, JsValue> {
            let removed = self.inner.remove_row()?;
            if removed {
                self.mount();
            }
            Ok(removed)
        }

        pub fn can_remove_row(&self) -> bool {
            self.inner.can_remove_row()
        }

        /// Forward a focus event from a cell.
        pub fn notify_focus(&mut self, row: usize, display_col: usize) -> bool {
            self.inner.focus_cell(row, display_col)
        }

        /// Forward a blur event.
        pub fn notify_blur(&mut self) {
            self.inner.blur();
        }

        pub fn has_focus(&self) -> bool {
            self.inner.has_focus()
        }

        /// Write the current serialization back into the textarea.
        pub fn sync(&mut self) {
            self.inner.sync();
        }

        /// Rebuild wholesale from the textarea's current value.
        pub fn reload(&mut self) {
            self.inner.reload();
            self.mount();
        }

        pub fn resize(&mut self) {
            self.inner.resize();
        }

        /// Sync, release the surface, and clear the container.
        pub fn destroy(&mut self) {
            self.inner.destroy();
            self.container.set_inner_html("");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::GridFieldElement;
