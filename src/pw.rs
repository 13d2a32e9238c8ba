
use crate::spa::{spa_dict, spa_hook};

use libc::{c_char, c_int, c_void};
use std::marker::{PhantomData, PhantomPinned};

pub const PW_VERSION_REGISTRY: u32 = 3;
pub const PW_VERSION_REGISTRY_EVENTS: u32 = 0;
pub const PW_VERSION_REGISTRY_METHODS: u32 = 0;

pub const PW_ID_ANY: u32 = 0xffffffff;

pub const PW_TYPE_INTERFACE_REGISTRY: &[u8] = b"PipeWire:Interface:Registry\0";
pub const PW_TYPE_INTERFACE_NODE: &[u8] = b"PipeWire:Interface:Node\0";

#[repr(C)]
pub struct pw_registry {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

#[repr(C)]
pub struct pw_proxy {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

// This needs to match struct pw_registry_events from <pipewire/core.h>.
// Handlers registered through the fixed-arity export always receive a null
// `data` pointer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct pw_registry_events {
    pub version: u32,
    pub global: Option<
        unsafe extern "C" fn(
            data: *mut c_void,
            id: u32,
            permissions: u32,
            type_: *const c_char,
            version: u32,
            props: *const spa_dict,
        ),
    >,
    pub global_remove: Option<unsafe extern "C" fn(data: *mut c_void, id: u32)>,
}

// The method table a registry dispatches through; matches struct
// pw_registry_methods from <pipewire/core.h>.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct pw_registry_methods {
    pub version: u32,
    pub add_listener: Option<
        unsafe extern "C" fn(
            object: *mut c_void,
            listener: *mut spa_hook,
            events: *const pw_registry_events,
            data: *mut c_void,
        ) -> c_int,
    >,
    pub bind: Option<
        unsafe extern "C" fn(
            object: *mut c_void,
            id: u32,
            type_: *const c_char,
            version: u32,
            user_data_size: usize,
        ) -> *mut pw_proxy,
    >,
    pub destroy: Option<unsafe extern "C" fn(object: *mut c_void, id: u32) -> c_int>,
}
