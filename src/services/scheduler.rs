// ============================================================================
// SCHEDULER - Tareas diferidas sobre el event loop del navegador
// ============================================================================

use std::future::Future;
use std::pin::Pin;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

/// Tarea local (no Send): todo corre en el hilo de UI
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

pub trait Scheduler {
    /// Ejecutar `task` pasados `delay_ms` milisegundos
    fn spawn_after(&self, delay_ms: u32, task: LocalTask);
}

/// `setTimeout` + `spawn_local`
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn spawn_after(&self, delay_ms: u32, task: LocalTask) {
        // Nota: forget() es seguro, el Timeout se consume al dispararse
        Timeout::new(delay_ms, move || spawn_local(task)).forget();
    }
}
