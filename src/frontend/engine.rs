//! Binding to the inertial scrolling engine exposed as `window.Lenis`.

use js_sys::{Array, Function, Reflect, JSON};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Element;

use crate::bridge::{EngineOptions, ScrollEngine};
use crate::error::{BridgeError, Result};
use crate::motion::expo_out;

const ENGINE_GLOBAL: &str = "Lenis";

pub struct Lenis {
    instance: JsValue,
    _easing: Closure<dyn Fn(f64) -> f64>,
}

/// `None` while the engine script has not registered its global yet.
pub fn detect() -> Option<Result<Lenis>> {
    let constructor = Reflect::get(&js_sys::global(), &JsValue::from_str(ENGINE_GLOBAL)).ok()?;
    if constructor.is_undefined() || constructor.is_null() {
        return None;
    }
    Some(Lenis::construct(&constructor))
}

impl Lenis {
    fn construct(constructor: &JsValue) -> Result<Self> {
        let constructor = constructor.dyn_ref::<Function>().ok_or_else(|| {
            BridgeError::EngineConstruct(format!("global `{ENGINE_GLOBAL}` is not a constructor"))
        })?;

        let options = JSON::parse(&EngineOptions::default().to_json()?)
            .map_err(|error| BridgeError::EngineConstruct(describe(&error)))?;
        let easing = Closure::<dyn Fn(f64) -> f64>::new(expo_out);
        Reflect::set(&options, &JsValue::from_str("easing"), easing.as_ref())
            .map_err(|error| BridgeError::EngineConstruct(describe(&error)))?;

        let instance = Reflect::construct(constructor, &Array::of1(&options))
            .map_err(|error| BridgeError::EngineConstruct(describe(&error)))?;

        Ok(Self {
            instance,
            _easing: easing,
        })
    }

    fn call(&self, method: &'static str, args: &Array) -> Result<()> {
        let function = Reflect::get(&self.instance, &JsValue::from_str(method))
            .map_err(|error| call_error(method, &error))?
            .dyn_into::<Function>()
            .map_err(|_| BridgeError::EngineCall {
                method,
                message: "not a function".to_string(),
            })?;

        function
            .apply(&self.instance, args)
            .map(|_| ())
            .map_err(|error| call_error(method, &error))
    }
}

impl ScrollEngine for Lenis {
    type Target = Element;

    fn raf(&mut self, time_ms: f64) -> Result<()> {
        self.call("raf", &Array::of1(&JsValue::from_f64(time_ms)))
    }

    fn scroll_to(&mut self, target: &Element) -> Result<()> {
        self.call("scrollTo", &Array::of1(target))
    }

    fn destroy(&mut self) -> Result<()> {
        self.call("destroy", &Array::new())
    }
}

fn call_error(method: &'static str, error: &JsValue) -> BridgeError {
    BridgeError::EngineCall {
        method,
        message: describe(error),
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
