
use crate::pw::{pw_registry, pw_registry_events};
use crate::spa::{spa_audio_info_raw, spa_hook, spa_pod, spa_pod_builder};

extern "C" {
    /// Fixed-arity export over `spa_format_audio_raw_build()`.
    ///
    /// Returns the pod built into `builder`, or null when the builder ran
    /// out of space; either outcome is the native one, relayed untouched.
    /// The builder and descriptor are borrowed for the duration of the call
    /// only. Like the wrapped helper, this must be called from the thread
    /// driving the PipeWire loop that owns the surrounding negotiation.
    pub fn pwglue_spa_format_audio_raw_build(
        builder: *mut spa_pod_builder,
        id: u32,
        info: *mut spa_audio_info_raw,
    ) -> *mut spa_pod;

    /// Fixed-arity export over the `pw_registry_add_listener()` method
    /// macro. The native trailing `user_data` argument is always passed as
    /// `NULL`, so handlers in `events` receive a null data pointer.
    ///
    /// Registry proxies belong to the thread running their `pw_core` loop
    /// and this call inherits that affinity. Registering the same hook
    /// twice has whatever effect it has natively; nothing is masked here.
    pub fn pwglue_pw_registry_add_listener(
        registry: *mut pw_registry,
        listener: *mut spa_hook,
        events: *const pw_registry_events,
    );
}
