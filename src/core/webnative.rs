//! Fission webnative bridge using js-sys.
//!
//! The SDK is loaded as a page script and exposed as `window.webnative`.
//! Calls go through the Reflect API so the crate does not need generated
//! bindings for the SDK's TypeScript surface.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::WEBNATIVE_GLOBAL;
use crate::core::error::{FsError, SessionError};
use crate::core::fs::{FileSystem, FsPath};
use crate::core::session::{Session, SessionBridge};
use crate::models::{AppPermissions, Scenario};
use crate::utils::dom;

/// Get the `window.webnative` SDK object.
fn get_sdk() -> Result<Object, SessionError> {
    let window = dom::window().ok_or(SessionError::NoWindow)?;
    Reflect::get(&window, &WEBNATIVE_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(SessionError::SdkMissing)
}

/// Call `target[method](...args)` synchronously.
fn call_sync(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let function = Reflect::get(target, &method.into())?.dyn_into::<Function>()?;
    let js_args: Array = args.iter().collect();
    function.apply(target, &js_args)
}

/// Call `target[method](...args)` and await the result when it is a promise.
async fn call_async(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let result = call_sync(target, method, args)?;
    match result.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(value) => Ok(value),
    }
}

/// Best-effort message from a thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}

fn get_string(target: &JsValue, key: &str) -> Option<String> {
    Reflect::get(target, &key.into()).ok()?.as_string()
}

fn permissions_value(permissions: &AppPermissions) -> Result<JsValue, SessionError> {
    serde_wasm_bindgen::to_value(permissions).map_err(|_| SessionError::RequestCreationFailed)
}

// ============================================================================
// Session Bridge
// ============================================================================

/// Session bridge backed by the webnative SDK.
pub struct WebnativeBridge {
    permissions: AppPermissions,
}

impl WebnativeBridge {
    pub fn new(permissions: AppPermissions) -> Self {
        Self { permissions }
    }
}

#[async_trait(?Send)]
impl SessionBridge for WebnativeBridge {
    async fn initialize(&self) -> Result<Session, SessionError> {
        let sdk = get_sdk()?;

        // Create { permissions: { app: { name, creator } } }
        let options = Object::new();
        Reflect::set(
            &options,
            &"permissions".into(),
            &permissions_value(&self.permissions)?,
        )
        .map_err(|_| SessionError::RequestCreationFailed)?;

        let state = call_async(&sdk, "initialize", &[options.into()])
            .await
            .map_err(|e| SessionError::Rejected(js_error_message(&e)))?;

        let tag = get_string(&state, "scenario").unwrap_or_default();
        let scenario =
            Scenario::from_tag(&tag).ok_or_else(|| SessionError::UnknownScenario(tag.clone()))?;
        info!("webnative session resolved: {}", scenario.tag());

        let fs: Option<Rc<dyn FileSystem>> = if scenario.is_authenticated() {
            let handle = Reflect::get(&state, &"fs".into())
                .ok()
                .filter(JsValue::is_object)
                .ok_or(SessionError::MissingFilesystem)?;
            Some(Rc::new(WebnativeFs::new(handle)))
        } else {
            None
        };

        Ok(Session {
            scenario,
            username: get_string(&state, "username"),
            fs,
        })
    }

    async fn redirect_to_login(&self) -> Result<(), SessionError> {
        let sdk = get_sdk()?;
        let permissions = permissions_value(&self.permissions)?;
        call_async(&sdk, "redirectToLobby", &[permissions])
            .await
            .map_err(|e| SessionError::Rejected(js_error_message(&e)))?;
        Ok(())
    }
}

// ============================================================================
// Filesystem
// ============================================================================

/// [`FileSystem`] over the SDK's `fs` object.
///
/// App-relative paths are resolved with `fs.appPath(segments)` on every call.
pub struct WebnativeFs {
    inner: JsValue,
}

impl WebnativeFs {
    pub fn new(inner: JsValue) -> Self {
        Self { inner }
    }

    fn error(method: &str, value: &JsValue) -> FsError {
        FsError::Js {
            method: method.to_string(),
            message: js_error_message(value),
        }
    }

    /// Absolute SDK path for an app-relative path.
    fn resolve(&self, path: &FsPath) -> Result<JsValue, FsError> {
        let args = if path.is_root() {
            Vec::new()
        } else {
            let segments: Array = path
                .segments()
                .iter()
                .map(|s| JsValue::from_str(s))
                .collect();
            vec![segments.into()]
        };
        call_sync(&self.inner, "appPath", &args).map_err(|e| Self::error("appPath", &e))
    }

    async fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, FsError> {
        debug!("fs.{method}");
        call_async(&self.inner, method, args)
            .await
            .map_err(|e| Self::error(method, &e))
    }
}

#[async_trait(?Send)]
impl FileSystem for WebnativeFs {
    async fn exists(&self, path: &FsPath) -> Result<bool, FsError> {
        let target = self.resolve(path)?;
        let result = self.call("exists", &[target]).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    async fn mkdir(&self, path: &FsPath) -> Result<(), FsError> {
        let target = self.resolve(path)?;
        self.call("mkdir", &[target]).await?;
        Ok(())
    }

    async fn ls(&self, path: &FsPath) -> Result<Vec<String>, FsError> {
        let target = self.resolve(path)?;
        let listing = self
            .call("ls", &[target])
            .await?
            .dyn_into::<Object>()
            .map_err(|_| FsError::NotADirectory(path.to_string()))?;

        Ok(Object::keys(&listing)
            .iter()
            .filter_map(|key| key.as_string())
            .collect())
    }

    async fn read(&self, path: &FsPath) -> Result<String, FsError> {
        let target = self.resolve(path)?;
        let content = self.call("read", &[target]).await?;

        if let Some(text) = content.as_string() {
            return Ok(text);
        }
        if content.is_instance_of::<Uint8Array>() {
            let bytes = Uint8Array::new(&content).to_vec();
            return String::from_utf8(bytes).map_err(|_| FsError::InvalidUtf8(path.to_string()));
        }
        Err(FsError::Js {
            method: "read".to_string(),
            message: format!("unexpected content type at {path}"),
        })
    }

    async fn write(&self, path: &FsPath, content: &str) -> Result<(), FsError> {
        let target = self.resolve(path)?;
        self.call("write", &[target, JsValue::from_str(content)])
            .await?;
        Ok(())
    }

    async fn rm(&self, path: &FsPath) -> Result<(), FsError> {
        let target = self.resolve(path)?;
        self.call("rm", &[target]).await?;
        Ok(())
    }

    async fn publish(&self) -> Result<(), FsError> {
        self.call("publish", &[]).await?;
        Ok(())
    }
}
