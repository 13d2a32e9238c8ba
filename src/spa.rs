
use libc::{c_char, c_void};

// These need to match enum spa_type from <spa/utils/type.h>.
pub const SPA_TYPE_NONE: u32 = 1;
pub const SPA_TYPE_BOOL: u32 = 2;
pub const SPA_TYPE_ID: u32 = 3;
pub const SPA_TYPE_INT: u32 = 4;
pub const SPA_TYPE_LONG: u32 = 5;
pub const SPA_TYPE_FLOAT: u32 = 6;
pub const SPA_TYPE_DOUBLE: u32 = 7;
pub const SPA_TYPE_STRING: u32 = 8;
pub const SPA_TYPE_BYTES: u32 = 9;
pub const SPA_TYPE_RECTANGLE: u32 = 10;
pub const SPA_TYPE_FRACTION: u32 = 11;
pub const SPA_TYPE_BITMAP: u32 = 12;
pub const SPA_TYPE_ARRAY: u32 = 13;
pub const SPA_TYPE_STRUCT: u32 = 14;
pub const SPA_TYPE_OBJECT: u32 = 15;
pub const SPA_TYPE_SEQUENCE: u32 = 16;
pub const SPA_TYPE_POINTER: u32 = 17;
pub const SPA_TYPE_FD: u32 = 18;
pub const SPA_TYPE_CHOICE: u32 = 19;
pub const SPA_TYPE_POD: u32 = 20;

pub const SPA_TYPE_OBJECT_START: u32 = 0x40000;
pub const SPA_TYPE_OBJECT_PROP_INFO: u32 = 0x40001;
pub const SPA_TYPE_OBJECT_PROPS: u32 = 0x40002;
pub const SPA_TYPE_OBJECT_FORMAT: u32 = 0x40003;

// These need to match enum spa_param_type from <spa/param/param.h>.
pub const SPA_PARAM_INVALID: u32 = 0;
pub const SPA_PARAM_PROP_INFO: u32 = 1;
pub const SPA_PARAM_PROPS: u32 = 2;
pub const SPA_PARAM_ENUM_FORMAT: u32 = 3;
pub const SPA_PARAM_FORMAT: u32 = 4;
pub const SPA_PARAM_BUFFERS: u32 = 5;
pub const SPA_PARAM_META: u32 = 6;
pub const SPA_PARAM_IO: u32 = 7;

// These need to match the enums from <spa/param/format.h>.
pub const SPA_MEDIA_TYPE_UNKNOWN: u32 = 0;
pub const SPA_MEDIA_TYPE_AUDIO: u32 = 1;
pub const SPA_MEDIA_TYPE_VIDEO: u32 = 2;
pub const SPA_MEDIA_TYPE_IMAGE: u32 = 3;

pub const SPA_MEDIA_SUBTYPE_UNKNOWN: u32 = 0;
pub const SPA_MEDIA_SUBTYPE_RAW: u32 = 1;
pub const SPA_MEDIA_SUBTYPE_DSP: u32 = 2;
pub const SPA_MEDIA_SUBTYPE_IEC958: u32 = 3;
pub const SPA_MEDIA_SUBTYPE_DSD: u32 = 4;

pub const SPA_FORMAT_MEDIA_TYPE: u32 = 1;
pub const SPA_FORMAT_MEDIA_SUBTYPE: u32 = 2;
pub const SPA_FORMAT_AUDIO_FORMAT: u32 = 0x10001;
pub const SPA_FORMAT_AUDIO_FLAGS: u32 = 0x10002;
pub const SPA_FORMAT_AUDIO_RATE: u32 = 0x10003;
pub const SPA_FORMAT_AUDIO_CHANNELS: u32 = 0x10004;
pub const SPA_FORMAT_AUDIO_POSITION: u32 = 0x10005;

pub type spa_audio_format = u32;

// These need to match enum spa_audio_format from <spa/param/audio/raw.h>;
// only the interleaved block is carried.
pub const SPA_AUDIO_FORMAT_UNKNOWN: spa_audio_format = 0;
pub const SPA_AUDIO_FORMAT_ENCODED: spa_audio_format = 1;
pub const SPA_AUDIO_FORMAT_S8: spa_audio_format = 0x100;
pub const SPA_AUDIO_FORMAT_U8: spa_audio_format = 0x101;
pub const SPA_AUDIO_FORMAT_S16_LE: spa_audio_format = 0x102;
pub const SPA_AUDIO_FORMAT_S16_BE: spa_audio_format = 0x103;
pub const SPA_AUDIO_FORMAT_U16_LE: spa_audio_format = 0x104;
pub const SPA_AUDIO_FORMAT_U16_BE: spa_audio_format = 0x105;
pub const SPA_AUDIO_FORMAT_S24_32_LE: spa_audio_format = 0x106;
pub const SPA_AUDIO_FORMAT_S24_32_BE: spa_audio_format = 0x107;
pub const SPA_AUDIO_FORMAT_U24_32_LE: spa_audio_format = 0x108;
pub const SPA_AUDIO_FORMAT_U24_32_BE: spa_audio_format = 0x109;
pub const SPA_AUDIO_FORMAT_S32_LE: spa_audio_format = 0x10a;
pub const SPA_AUDIO_FORMAT_S32_BE: spa_audio_format = 0x10b;
pub const SPA_AUDIO_FORMAT_U32_LE: spa_audio_format = 0x10c;
pub const SPA_AUDIO_FORMAT_U32_BE: spa_audio_format = 0x10d;
pub const SPA_AUDIO_FORMAT_S24_LE: spa_audio_format = 0x10e;
pub const SPA_AUDIO_FORMAT_S24_BE: spa_audio_format = 0x10f;
pub const SPA_AUDIO_FORMAT_U24_LE: spa_audio_format = 0x110;
pub const SPA_AUDIO_FORMAT_U24_BE: spa_audio_format = 0x111;
pub const SPA_AUDIO_FORMAT_S20_LE: spa_audio_format = 0x112;
pub const SPA_AUDIO_FORMAT_S20_BE: spa_audio_format = 0x113;
pub const SPA_AUDIO_FORMAT_U20_LE: spa_audio_format = 0x114;
pub const SPA_AUDIO_FORMAT_U20_BE: spa_audio_format = 0x115;
pub const SPA_AUDIO_FORMAT_S18_LE: spa_audio_format = 0x116;
pub const SPA_AUDIO_FORMAT_S18_BE: spa_audio_format = 0x117;
pub const SPA_AUDIO_FORMAT_U18_LE: spa_audio_format = 0x118;
pub const SPA_AUDIO_FORMAT_U18_BE: spa_audio_format = 0x119;
pub const SPA_AUDIO_FORMAT_F32_LE: spa_audio_format = 0x11a;
pub const SPA_AUDIO_FORMAT_F32_BE: spa_audio_format = 0x11b;
pub const SPA_AUDIO_FORMAT_F64_LE: spa_audio_format = 0x11c;
pub const SPA_AUDIO_FORMAT_F64_BE: spa_audio_format = 0x11d;
pub const SPA_AUDIO_FORMAT_ULAW: spa_audio_format = 0x11e;
pub const SPA_AUDIO_FORMAT_ALAW: spa_audio_format = 0x11f;

#[cfg(target_endian = "little")]
pub const SPA_AUDIO_FORMAT_S16: spa_audio_format = SPA_AUDIO_FORMAT_S16_LE;
#[cfg(target_endian = "little")]
pub const SPA_AUDIO_FORMAT_S24_32: spa_audio_format = SPA_AUDIO_FORMAT_S24_32_LE;
#[cfg(target_endian = "little")]
pub const SPA_AUDIO_FORMAT_S32: spa_audio_format = SPA_AUDIO_FORMAT_S32_LE;
#[cfg(target_endian = "little")]
pub const SPA_AUDIO_FORMAT_S24: spa_audio_format = SPA_AUDIO_FORMAT_S24_LE;
#[cfg(target_endian = "little")]
pub const SPA_AUDIO_FORMAT_F32: spa_audio_format = SPA_AUDIO_FORMAT_F32_LE;
#[cfg(target_endian = "little")]
pub const SPA_AUDIO_FORMAT_F64: spa_audio_format = SPA_AUDIO_FORMAT_F64_LE;

#[cfg(target_endian = "big")]
pub const SPA_AUDIO_FORMAT_S16: spa_audio_format = SPA_AUDIO_FORMAT_S16_BE;
#[cfg(target_endian = "big")]
pub const SPA_AUDIO_FORMAT_S24_32: spa_audio_format = SPA_AUDIO_FORMAT_S24_32_BE;
#[cfg(target_endian = "big")]
pub const SPA_AUDIO_FORMAT_S32: spa_audio_format = SPA_AUDIO_FORMAT_S32_BE;
#[cfg(target_endian = "big")]
pub const SPA_AUDIO_FORMAT_S24: spa_audio_format = SPA_AUDIO_FORMAT_S24_BE;
#[cfg(target_endian = "big")]
pub const SPA_AUDIO_FORMAT_F32: spa_audio_format = SPA_AUDIO_FORMAT_F32_BE;
#[cfg(target_endian = "big")]
pub const SPA_AUDIO_FORMAT_F64: spa_audio_format = SPA_AUDIO_FORMAT_F64_BE;

pub const SPA_AUDIO_FLAG_NONE: u32 = 0;
pub const SPA_AUDIO_FLAG_UNPOSITIONED: u32 = 1 << 0;

pub type spa_audio_channel = u32;

pub const SPA_AUDIO_CHANNEL_UNKNOWN: spa_audio_channel = 0;
pub const SPA_AUDIO_CHANNEL_NA: spa_audio_channel = 1;
pub const SPA_AUDIO_CHANNEL_MONO: spa_audio_channel = 2;
pub const SPA_AUDIO_CHANNEL_FL: spa_audio_channel = 3;
pub const SPA_AUDIO_CHANNEL_FR: spa_audio_channel = 4;
pub const SPA_AUDIO_CHANNEL_FC: spa_audio_channel = 5;
pub const SPA_AUDIO_CHANNEL_LFE: spa_audio_channel = 6;
pub const SPA_AUDIO_CHANNEL_SL: spa_audio_channel = 7;
pub const SPA_AUDIO_CHANNEL_SR: spa_audio_channel = 8;
pub const SPA_AUDIO_CHANNEL_FLC: spa_audio_channel = 9;
pub const SPA_AUDIO_CHANNEL_FRC: spa_audio_channel = 10;
pub const SPA_AUDIO_CHANNEL_RC: spa_audio_channel = 11;
pub const SPA_AUDIO_CHANNEL_RL: spa_audio_channel = 12;
pub const SPA_AUDIO_CHANNEL_RR: spa_audio_channel = 13;

pub const SPA_AUDIO_MAX_CHANNELS: usize = 64;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_list {
    pub next: *mut spa_list,
    pub prev: *mut spa_list,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_callbacks {
    pub funcs: *const c_void,
    pub data: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_interface {
    pub type_: *const c_char,
    pub version: u32,
    pub cb: spa_callbacks,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_hook {
    pub link: spa_list,
    pub cb: spa_callbacks,
    pub removed: Option<unsafe extern "C" fn(hook: *mut spa_hook)>,
    pub priv_: *mut c_void,
}

impl spa_hook {
    /// A zeroed hook, the state `spa_zero()` leaves a listener record in
    /// before registration.
    pub fn new() -> Self {
        Self {
            link: spa_list {
                next: std::ptr::null_mut(),
                prev: std::ptr::null_mut(),
            },
            cb: spa_callbacks {
                funcs: std::ptr::null(),
                data: std::ptr::null_mut(),
            },
            removed: None,
            priv_: std::ptr::null_mut(),
        }
    }
}

impl Default for spa_hook {
    fn default() -> Self {
        Self::new()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_dict_item {
    pub key: *const c_char,
    pub value: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_dict {
    pub flags: u32,
    pub n_items: u32,
    pub items: *const spa_dict_item,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct spa_pod {
    pub size: u32,
    pub type_: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_pod_frame {
    pub pod: spa_pod,
    pub parent: *mut spa_pod_frame,
    pub offset: u32,
    pub flags: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_pod_builder_state {
    pub offset: u32,
    pub flags: u32,
    pub frame: *mut spa_pod_frame,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spa_pod_builder {
    pub data: *mut c_void,
    pub size: u32,
    pub _padding: u32,
    pub state: spa_pod_builder_state,
    pub callbacks: spa_callbacks,
}

impl spa_pod_builder {
    /// The state `SPA_POD_BUILDER_INIT()` produces: writes go to `data`,
    /// nothing built yet, no overflow callbacks installed.
    pub fn new(data: *mut c_void, size: u32) -> Self {
        Self {
            data,
            size,
            _padding: 0,
            state: spa_pod_builder_state {
                offset: 0,
                flags: 0,
                frame: std::ptr::null_mut(),
            },
            callbacks: spa_callbacks {
                funcs: std::ptr::null(),
                data: std::ptr::null_mut(),
            },
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct spa_audio_info_raw {
    pub format: spa_audio_format,
    pub flags: u32,
    pub rate: u32,
    pub channels: u32,
    pub position: [spa_audio_channel; SPA_AUDIO_MAX_CHANNELS],
}

impl Default for spa_audio_info_raw {
    fn default() -> Self {
        Self {
            format: SPA_AUDIO_FORMAT_UNKNOWN,
            flags: SPA_AUDIO_FLAG_NONE,
            rate: 0,
            channels: 0,
            position: [SPA_AUDIO_CHANNEL_UNKNOWN; SPA_AUDIO_MAX_CHANNELS],
        }
    }
}
