use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::config::SlotConfig;

use super::display::SlotDisplay;
use super::generator::SlotsGenerator;
use super::scheduler::Scheduler;
use super::stagger::{stop_duration_ms, stop_stages, StopStage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Stopped,
    Spinning,
}

impl SpinState {
    /// Toggle button text for this state
    pub fn button_label(&self) -> &'static str {
        match self {
            SpinState::Stopped => "Start Spinning!",
            SpinState::Spinning => "Stop Spinning!",
        }
    }
}

/// Generator and display, shared with every pending timer callback
struct Reels<D> {
    generator: SlotsGenerator<String>,
    display: D,
}

impl<D: SlotDisplay> Reels<D> {
    /// Pull one row and write the slots from `first_active` onward
    fn tick(&mut self, first_active: usize) {
        if let Some(row) = self.generator.next() {
            self.display.show(first_active, &row[first_active..]);
        }
    }
}

/// Start/stop state machine for one slot machine widget
pub struct SpinController<D, S: Scheduler> {
    reels: Rc<RefCell<Reels<D>>>,
    scheduler: S,
    state: SpinState,
    spin_timer: Option<S::Handle>,
    stop_timers: Vec<S::Handle>,
    stop_plan: Vec<StopStage>,
    spin_delay_ms: u32,
    stop_ticks: u32,
}

impl<D, S> SpinController<D, S>
where
    D: SlotDisplay + 'static,
    S: Scheduler,
{
    /// One reel per display slot, each with its own shuffle of the alphabet
    pub fn new(config: &SlotConfig, display: D, scheduler: S) -> Self {
        let generator = SlotsGenerator::new(&config.alphabet, display.slot_count());
        Self {
            reels: Rc::new(RefCell::new(Reels { generator, display })),
            scheduler,
            state: SpinState::Stopped,
            spin_timer: None,
            stop_timers: Vec::new(),
            stop_plan: Vec::new(),
            spin_delay_ms: config.spin_delay_ms,
            stop_ticks: config.stop_ticks,
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    #[allow(dead_code)]
    pub fn is_spinning(&self) -> bool {
        self.state == SpinState::Spinning
    }

    pub fn display(&self) -> Ref<'_, D> {
        Ref::map(self.reels.borrow(), |reels| &reels.display)
    }

    /// Stages scheduled by the most recent stop
    #[allow(dead_code)]
    pub fn stop_plan(&self) -> &[StopStage] {
        &self.stop_plan
    }

    /// Start when stopped, stop when spinning; returns the new state
    pub fn toggle(&mut self) -> SpinState {
        match self.state {
            SpinState::Stopped => self.start(),
            SpinState::Spinning => self.stop(),
        }
        self.state
    }

    fn start(&mut self) {
        // A stop animation still in flight would fight the new spin for the slots
        if !self.stop_timers.is_empty() {
            log::debug!("Cancelling {} pending stop ticks", self.stop_timers.len());
            self.stop_timers.clear();
        }

        self.reels.borrow_mut().tick(0);

        let reels = Rc::clone(&self.reels);
        self.spin_timer = Some(
            self.scheduler
                .repeat(self.spin_delay_ms, move || reels.borrow_mut().tick(0)),
        );
        self.state = SpinState::Spinning;
        log::info!("Slots spinning every {}ms", self.spin_delay_ms);
    }

    fn stop(&mut self) {
        self.spin_timer = None;
        self.stop_timers.clear();

        let slot_count = self.display().slot_count();
        self.stop_plan = stop_stages(slot_count, self.stop_ticks, self.spin_delay_ms);

        for stage in &self.stop_plan {
            let first_active = stage.first_active;
            for offset in stage.tick_offsets(self.spin_delay_ms) {
                if offset == 0 {
                    self.reels.borrow_mut().tick(first_active);
                    continue;
                }
                let reels = Rc::clone(&self.reels);
                let handle = self
                    .scheduler
                    .once(offset, move || reels.borrow_mut().tick(first_active));
                self.stop_timers.push(handle);
            }
        }

        log::debug!(
            "Scheduled {} stop stages ({} deferred ticks), settling in {}ms",
            self.stop_plan.len(),
            self.stop_timers.len(),
            stop_duration_ms(slot_count, self.stop_ticks, self.spin_delay_ms)
        );
        // Stopped as soon as the wind-down is scheduled, not when it finishes
        self.state = SpinState::Stopped;
        log::info!("Slots stopping");
    }
}
