use crate::*;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use fixed_list::{Align, ListOptions, OptionsError};
use proptest::prelude::*;

type Log = Rc<RefCell<Vec<String>>>;

/// A surface handle that records listener registrations.
#[derive(Clone)]
struct TestSurface {
    name: &'static str,
    offset: Rc<Cell<i64>>,
    listeners: Rc<Cell<usize>>,
    log: Log,
}

impl TestSurface {
    fn new(name: &'static str, offset: i64, log: &Log) -> Self {
        Self {
            name,
            offset: Rc::new(Cell::new(offset)),
            listeners: Rc::new(Cell::new(0)),
            log: Rc::clone(log),
        }
    }

    fn scroll_to(&self, offset: i64) {
        self.offset.set(offset);
    }

    fn listeners(&self) -> usize {
        self.listeners.get()
    }
}

impl PartialEq for TestSurface {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.offset, &other.offset)
    }
}

impl ScrollSurface for TestSurface {
    fn scroll_offset(&self) -> i64 {
        self.offset.get()
    }

    fn listen(&self) {
        self.listeners.set(self.listeners.get() + 1);
        self.log.borrow_mut().push(alloc::format!("{}:listen", self.name));
    }

    fn unlisten(&self) {
        self.listeners.set(self.listeners.get() - 1);
        self.log
            .borrow_mut()
            .push(alloc::format!("{}:unlisten", self.name));
    }
}

fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn demo_options() -> ListOptions {
    ListOptions::new(10_000, 40, 600)
}

fn log_entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

#[test]
fn attach_publishes_current_offset_without_scrolling() {
    let log = new_log();
    let surface = TestSurface::new("a", 4000, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));

    let snap = list.snapshot();
    assert_eq!(snap.start_index(), Some(97));
    assert_eq!(snap.end_index(), Some(118));
    assert!(!snap.is_scrolling);
    assert_eq!(list.next_wakeup_ms(), None);
    assert_eq!(list.scroll_offset(), 4000);
    assert_eq!(surface.listeners(), 1);
    assert!(list.is_attached());
    assert!(list.surface().is_some_and(|s| *s == surface));
}

#[test]
fn detached_list_is_inert() {
    let mut list = FixedSizeList::<TestSurface>::new(demo_options());
    let before = list.snapshot();

    list.on_scroll(0);
    assert!(!list.tick(1_000));
    assert!(!list.is_scrolling());
    assert_eq!(list.snapshot(), before);
    assert_eq!(before.start_index(), Some(0));
    assert_eq!(before.end_index(), Some(18));
    assert_eq!(before.total_list_height(), 400_000);
    assert!(!list.sync_surface());
}

#[test]
fn scroll_updates_window_before_returning() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));

    surface.scroll_to(4000);
    list.on_scroll(10);

    assert_eq!(list.window().start_index(), Some(97));
    assert_eq!(list.window().end_index(), Some(118));
    assert!(list.is_scrolling());
    assert_eq!(list.next_wakeup_ms(), Some(160));
}

#[test]
fn scrolling_flag_settles_exactly_after_quiet_period() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));

    let mut offset = 0;
    for now_ms in 0..=800u64 {
        if now_ms % 50 == 0 && now_ms <= 500 {
            offset += 200;
            surface.scroll_to(offset);
            list.on_scroll(now_ms);
        }
        list.tick(now_ms);
        assert_eq!(list.is_scrolling(), now_ms < 650, "now_ms={now_ms}");
    }
    assert_eq!(list.next_wakeup_ms(), None);
}

#[test]
fn host_can_sleep_until_next_wakeup() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));

    surface.scroll_to(100);
    list.on_scroll(1_000);
    let wakeup = list.next_wakeup_ms();
    assert_eq!(wakeup, Some(1_150));

    assert!(!list.tick(1_149));
    assert!(list.tick(1_150));
    assert!(!list.is_scrolling());
}

#[test]
fn detach_removes_listener_and_cancels_countdown() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));

    surface.scroll_to(400);
    list.on_scroll(0);
    assert!(list.is_scrolling());

    list.detach();
    assert_eq!(surface.listeners(), 0);
    assert!(!list.is_attached());
    assert!(!list.is_scrolling());
    assert_eq!(list.next_wakeup_ms(), None);
    assert!(!list.tick(10_000));

    // Notifications from a detached surface are ignored.
    surface.scroll_to(9000);
    list.on_scroll(20);
    assert_eq!(list.scroll_offset(), 400);
    assert!(!list.is_scrolling());

    let entries = log_entries(&log);
    list.detach();
    assert_eq!(log_entries(&log), entries);
    assert_eq!(entries, ["a:listen", "a:unlisten"]);
}

#[test]
fn reattach_releases_previous_surface_first() {
    let log = new_log();
    let a = TestSurface::new("a", 0, &log);
    let b = TestSurface::new("b", 800, &log);
    let mut list = FixedSizeList::new(demo_options());

    list.attach(Some(a.clone()));
    a.scroll_to(120);
    list.on_scroll(0);
    assert!(list.next_wakeup_ms().is_some());

    list.attach(Some(b.clone()));
    assert_eq!(log_entries(&log), ["a:listen", "a:unlisten", "b:listen"]);
    assert_eq!(a.listeners(), 0);
    assert_eq!(b.listeners(), 1);
    assert_eq!(list.next_wakeup_ms(), None);
    assert!(!list.is_scrolling());
    assert_eq!(list.scroll_offset(), 800);

    // Scrolling the old surface has no effect on the list.
    a.scroll_to(5000);
    list.on_scroll(20);
    assert_eq!(list.scroll_offset(), 800);
}

#[test]
fn attaching_none_detaches() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));
    list.attach(None);
    assert!(!list.is_attached());
    assert_eq!(surface.listeners(), 0);
}

#[test]
fn dropping_list_removes_listener() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));
    surface.scroll_to(100);
    list.on_scroll(0);

    drop(list);
    assert_eq!(surface.listeners(), 0);
    assert_eq!(log_entries(&log), ["a:listen", "a:unlisten"]);
}

#[test]
fn sync_surface_follows_provider() {
    let log = new_log();
    let a = TestSurface::new("a", 400, &log);
    let b = TestSurface::new("b", 0, &log);
    let slot: Rc<RefCell<Option<TestSurface>>> = Rc::new(RefCell::new(None));

    let provider_slot = Rc::clone(&slot);
    let mut list = FixedSizeList::new(demo_options())
        .with_scroll_element(move || provider_slot.borrow().clone());

    // Not mounted yet.
    assert!(!list.sync_surface());
    assert!(!list.is_attached());

    *slot.borrow_mut() = Some(a.clone());
    assert!(list.sync_surface());
    assert_eq!(list.scroll_offset(), 400);
    // Same handle: nothing to do.
    assert!(!list.sync_surface());
    assert_eq!(a.listeners(), 1);

    *slot.borrow_mut() = Some(b.clone());
    assert!(list.sync_surface());
    assert_eq!(a.listeners(), 0);
    assert_eq!(b.listeners(), 1);
    assert_eq!(list.scroll_offset(), 0);

    *slot.borrow_mut() = None;
    assert!(list.sync_surface());
    assert!(!list.is_attached());
    assert_eq!(b.listeners(), 0);
}

#[test]
fn on_change_fires_once_per_visible_change() {
    let calls = Rc::new(Cell::new(0usize));
    let last = Rc::new(Cell::new(None::<ListSnapshot>));

    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options()).with_on_change({
        let calls = Rc::clone(&calls);
        let last = Rc::clone(&last);
        move |snap: &ListSnapshot| {
            calls.set(calls.get() + 1);
            last.set(Some(*snap));
        }
    });

    // Attaching at the initial offset changes nothing observable.
    list.attach(Some(surface.clone()));
    assert_eq!(calls.get(), 0);

    // Offset and is_scrolling change together: one notification.
    surface.scroll_to(4000);
    list.on_scroll(30);
    assert_eq!(calls.get(), 1);
    assert!(last.get().is_some_and(|s| s.is_scrolling));

    // Same offset while scrolling: only the countdown moves.
    list.on_scroll(40);
    assert_eq!(calls.get(), 1);

    assert!(list.tick(190));
    assert_eq!(calls.get(), 2);
    assert!(last.get().is_some_and(|s| !s.is_scrolling));
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Rc::new(Cell::new(0usize));
    let mut list = FixedSizeList::<TestSurface>::new(demo_options()).with_on_change({
        let calls = Rc::clone(&calls);
        move |_: &ListSnapshot| calls.set(calls.get() + 1)
    });

    list.batch_update(|l| {
        l.set_count(50);
        l.set_viewport_height(100);
        l.set_overscan(0);
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(list.window().end_index(), Some(3));
}

#[test]
fn set_on_change_replaces_callback() {
    let calls = Rc::new(Cell::new(0usize));
    let mut list = FixedSizeList::<TestSurface>::new(demo_options());
    list.set_on_change(Some({
        let calls = Rc::clone(&calls);
        move |_: &ListSnapshot| calls.set(calls.get() + 1)
    }));
    list.set_count(1);
    assert_eq!(calls.get(), 1);

    list.set_on_change(None::<fn(&ListSnapshot)>);
    list.set_count(2);
    assert_eq!(calls.get(), 1);
}

#[test]
fn count_changes_recompute_window() {
    let calls = Rc::new(Cell::new(0usize));
    let log = new_log();
    let surface = TestSurface::new("a", 4000, &log);
    let mut list = FixedSizeList::new(demo_options()).with_on_change({
        let calls = Rc::clone(&calls);
        move |_: &ListSnapshot| calls.set(calls.get() + 1)
    });
    list.attach(Some(surface));
    let after_attach = calls.get();

    list.set_count(5);
    assert_eq!(list.window().start_index(), Some(0));
    assert_eq!(list.window().end_index(), Some(4));
    assert_eq!(list.snapshot().total_list_height(), 200);
    assert_eq!(calls.get(), after_attach + 1);

    // Reordering the data keeps the count: nothing to recompute.
    list.set_count(5);
    assert_eq!(calls.get(), after_attach + 1);

    list.set_count(0);
    assert!(list.window().is_empty());
    assert_eq!(list.snapshot().virtual_items().len(), 0);
}

#[test]
fn geometry_changes_recompute_window() {
    let mut list = FixedSizeList::<TestSurface>::new(demo_options());
    list.set_viewport_height(200);
    assert_eq!(list.window().end_index(), Some(8));
    list.set_item_height(20);
    assert_eq!(list.window().end_index(), Some(13));
    assert_eq!(list.snapshot().total_list_height(), 200_000);
}

#[test]
fn scrolling_delay_change_applies_to_next_event() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));
    list.set_scrolling_delay_ms(40);
    assert_eq!(list.options().scrolling_delay_ms, 40);

    surface.scroll_to(10);
    list.on_scroll(100);
    assert_eq!(list.next_wakeup_ms(), Some(140));
}

#[test]
fn try_new_rejects_invalid_geometry() {
    let err = FixedSizeList::<TestSurface>::try_new(ListOptions::new(10, 0, 600)).unwrap_err();
    assert_eq!(err, OptionsError::ZeroItemHeight);
    assert!(FixedSizeList::<TestSurface>::try_new(demo_options()).is_ok());

    // `new` still accepts it and renders nothing.
    let list = FixedSizeList::<TestSurface>::new(ListOptions::new(10, 0, 600));
    assert!(list.window().is_empty());
}

#[test]
fn overscroll_offset_renders_top() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));

    surface.scroll_to(-30);
    list.on_scroll(0);
    assert_eq!(list.scroll_offset(), -30);
    assert_eq!(list.window().start_index(), Some(0));
    assert_eq!(list.window().end_index(), Some(18));
}

#[test]
fn scroll_to_index_offset_round_trips_through_surface() {
    let log = new_log();
    let surface = TestSurface::new("a", 0, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface.clone()));

    let target = list.scroll_to_index_offset(500, Align::Start);
    assert_eq!(target, 20_000);
    // The list itself does not move until the surface reports the scroll.
    assert_eq!(list.scroll_offset(), 0);

    surface.scroll_to(target as i64);
    list.on_scroll(0);
    assert_eq!(list.window().start_index(), Some(497));
    assert!(list.window().contains(500));
}

#[test]
fn snapshot_exposes_render_data() {
    let log = new_log();
    let surface = TestSurface::new("a", 4000, &log);
    let mut list = FixedSizeList::new(demo_options());
    list.attach(Some(surface));

    let snap = list.snapshot();
    let items: Vec<_> = snap.virtual_items().collect();
    assert_eq!(items.len(), 22);
    assert!(items.iter().all(|it| it.offset_top == it.index as u64 * 40));
    assert_eq!(snap.total_list_height(), 400_000);
    assert_eq!(list.scroll_state().offset, 4000);
}

#[test]
fn borrowed_and_shared_handles_are_surfaces() {
    let log = new_log();
    let surface = TestSurface::new("a", 400, &log);
    {
        let mut list = FixedSizeList::new(demo_options());
        list.attach(Some(&surface));
        assert_eq!(list.scroll_offset(), 400);
    }
    {
        let mut list = FixedSizeList::new(demo_options());
        list.attach(Some(Rc::new(surface.clone())));
        assert_eq!(surface.listeners(), 1);
    }
    assert_eq!(surface.listeners(), 0);
}

#[test]
fn debug_output_names_the_list() {
    let list = FixedSizeList::<TestSurface>::new(demo_options());
    let out = alloc::format!("{list:?}");
    assert!(out.starts_with("FixedSizeList"));
    assert!(out.contains("attached: false"));
}

proptest! {
    #[test]
    fn is_scrolling_tracks_quiet_period(
        gaps in proptest::collection::vec(1u64..200, 1..20),
        delay in 0u64..300,
    ) {
        let log = new_log();
        let surface = TestSurface::new("a", 0, &log);
        let mut list = FixedSizeList::new(demo_options().with_scrolling_delay_ms(delay));
        list.attach(Some(surface.clone()));

        let mut events = Vec::with_capacity(gaps.len());
        let mut t = 0u64;
        for gap in &gaps {
            t += gap;
            events.push(t);
        }
        let end = t + delay + 2;

        let mut next = 0usize;
        let mut last_event: Option<u64> = None;
        for now_ms in 0..=end {
            if events.get(next) == Some(&now_ms) {
                surface.scroll_to(now_ms as i64);
                list.on_scroll(now_ms);
                last_event = Some(now_ms);
                next += 1;
            }
            list.tick(now_ms);
            let expected = last_event.is_some_and(|e| now_ms < e + delay);
            prop_assert_eq!(list.is_scrolling(), expected, "now_ms={}", now_ms);
        }
    }
}
