//! Block-editor capability interface and its JS adapter.
//!
//! The visual block-programming library is a page-level JS global; the
//! application consumes it only through [`BlockEditor`], a narrow
//! capability surface: inject a workspace into a container, read/write the
//! workspace's block tree, register a change listener, and generate text
//! output from the tree. [`BlocklyWorkspace`] implements it over the
//! concrete library via direct JavaScript interop through the Reflect API;
//! everything past this call shape stays inside the library.

use std::cell::RefCell;

use js_sys::{Function, Object, Reflect};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

use crate::config::{BLOCK_LIBRARY_GLOBAL, CODE_GENERATOR_KEY};
use crate::core::error::WorkspaceError;
use crate::utils::dom;

/// Capability surface of the visual block editor.
pub trait BlockEditor {
    /// Inject a workspace into the DOM container with the given options.
    fn inject(&self, container_id: &str, options: &Value) -> Result<(), WorkspaceError>;

    /// Read the workspace's block tree.
    fn workspace_tree(&self) -> Result<Value, WorkspaceError>;

    /// Replace the workspace's block tree.
    fn set_workspace_tree(&self, tree: &Value) -> Result<(), WorkspaceError>;

    /// Register a listener invoked on every workspace change.
    fn on_change(&self, listener: Box<dyn Fn()>) -> Result<(), WorkspaceError>;

    /// Generate textual output from the current block tree.
    fn generate_code(&self) -> Result<String, WorkspaceError>;
}

/// [`BlockEditor`] adapter over the Blockly-family global.
#[derive(Default)]
pub struct BlocklyWorkspace {
    /// The injected workspace object; populated by `inject`.
    workspace: RefCell<Option<Object>>,
}

impl BlocklyWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the library global is present on the page.
    pub fn library_available() -> bool {
        library().is_ok()
    }

    fn workspace(&self) -> Result<Object, WorkspaceError> {
        self.workspace
            .borrow()
            .clone()
            .ok_or_else(|| WorkspaceError::TreeUnavailable("no workspace injected".to_string()))
    }
}

/// Get the block-editor library global from `window`.
fn library() -> Result<Object, WorkspaceError> {
    let window = dom::window().ok_or(WorkspaceError::NoWindow)?;
    Reflect::get(&window, &BLOCK_LIBRARY_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WorkspaceError::LibraryMissing)
}

fn get_object(target: &JsValue, key: &str) -> Result<Object, WorkspaceError> {
    Reflect::get(target, &key.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or_else(|| WorkspaceError::TreeUnavailable(format!("missing object '{}'", key)))
}

fn get_function(target: &JsValue, key: &str) -> Result<Function, WorkspaceError> {
    Reflect::get(target, &key.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| WorkspaceError::TreeUnavailable(format!("missing function '{}'", key)))
}

/// Get the library's `serialization.workspaces` object.
fn serializer() -> Result<Object, WorkspaceError> {
    let lib = library()?;
    let serialization = get_object(&lib, "serialization")?;
    get_object(&serialization, "workspaces")
}

impl BlockEditor for BlocklyWorkspace {
    fn inject(&self, container_id: &str, options: &Value) -> Result<(), WorkspaceError> {
        let lib = library()?;
        let inject = get_function(&lib, "inject")
            .map_err(|_| WorkspaceError::InjectFailed("library has no inject".to_string()))?;

        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| WorkspaceError::InjectFailed(e.to_string()))?;

        let workspace = inject
            .call2(&lib, &container_id.into(), &options)
            .map_err(|e| WorkspaceError::InjectFailed(format!("{:?}", e)))?
            .dyn_into::<Object>()
            .map_err(|_| WorkspaceError::InjectFailed("inject returned no workspace".to_string()))?;

        *self.workspace.borrow_mut() = Some(workspace);
        Ok(())
    }

    fn workspace_tree(&self) -> Result<Value, WorkspaceError> {
        let workspace = self.workspace()?;
        let workspaces = serializer()?;
        let save = get_function(&workspaces, "save")?;

        let tree = save
            .call1(&workspaces, &workspace)
            .map_err(|e| WorkspaceError::TreeUnavailable(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(tree)
            .map_err(|e| WorkspaceError::TreeUnavailable(e.to_string()))
    }

    fn set_workspace_tree(&self, tree: &Value) -> Result<(), WorkspaceError> {
        let workspace = self.workspace()?;
        let workspaces = serializer()?;
        let load = get_function(&workspaces, "load")?;

        let tree = serde_wasm_bindgen::to_value(tree)
            .map_err(|e| WorkspaceError::TreeUnavailable(e.to_string()))?;
        load.call2(&workspaces, &tree, &workspace)
            .map_err(|e| WorkspaceError::TreeUnavailable(format!("{:?}", e)))?;
        Ok(())
    }

    fn on_change(&self, listener: Box<dyn Fn()>) -> Result<(), WorkspaceError> {
        let workspace = self.workspace()?;
        let add_listener = get_function(&workspace, "addChangeListener")?;

        let closure = Closure::wrap(listener);
        add_listener
            .call1(&workspace, closure.as_ref().unchecked_ref())
            .map_err(|e| WorkspaceError::TreeUnavailable(format!("{:?}", e)))?;

        // The listener lives as long as the workspace does.
        closure.forget();
        Ok(())
    }

    fn generate_code(&self) -> Result<String, WorkspaceError> {
        let workspace = self.workspace()?;
        let lib = library()?;
        let generator = get_object(&lib, CODE_GENERATOR_KEY)
            .map_err(|_| WorkspaceError::CodegenFailed(format!("no '{}' generator", CODE_GENERATOR_KEY)))?;
        let to_code = get_function(&generator, "workspaceToCode")
            .map_err(|e| WorkspaceError::CodegenFailed(e.to_string()))?;

        to_code
            .call1(&generator, &workspace)
            .map_err(|e| WorkspaceError::CodegenFailed(format!("{:?}", e)))?
            .as_string()
            .ok_or_else(|| WorkspaceError::CodegenFailed("generator returned no text".to_string()))
    }
}
