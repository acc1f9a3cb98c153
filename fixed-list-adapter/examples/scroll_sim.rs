use std::cell::Cell;
use std::rc::Rc;

use fixed_list::ListOptions;
use fixed_list_adapter::{FixedSizeList, ListSnapshot, ScrollSurface};

// A stand-in for a real scroll container: the host owns the offset and forwards notifications.
#[derive(Clone, PartialEq)]
struct Pane {
    offset: Rc<Cell<i64>>,
}

impl ScrollSurface for Pane {
    fn scroll_offset(&self) -> i64 {
        self.offset.get()
    }

    fn listen(&self) {
        println!("pane: listening");
    }

    fn unlisten(&self) {
        println!("pane: stopped listening");
    }
}

fn render(rows: &[String], snap: &ListSnapshot) {
    let labels: Vec<&str> = snap
        .virtual_items()
        .map(|it| {
            if snap.is_scrolling {
                "Scrolling..."
            } else {
                rows[it.index].as_str()
            }
        })
        .collect();
    println!(
        "height={} range={:?}..={:?} first={:?}",
        snap.total_list_height(),
        snap.start_index(),
        snap.end_index(),
        labels.first()
    );
}

fn main() {
    // Example: a wheel gesture followed by a pause, then a data reversal.
    let mut rows: Vec<String> = (0..10_000).map(|i| i.to_string()).collect();
    let pane = Pane {
        offset: Rc::new(Cell::new(0)),
    };

    let mounted = pane.clone();
    let mut list = FixedSizeList::new(ListOptions::new(rows.len(), 40, 600))
        .with_scroll_element(move || Some(mounted.clone()));
    list.sync_surface();
    render(&rows, &list.snapshot());

    let mut now_ms = 0u64;
    for _ in 0..10 {
        now_ms += 16;
        pane.offset.set(pane.offset.get() + 120);
        list.on_scroll(now_ms);
    }
    render(&rows, &list.snapshot());

    // Sleep until the debounce expires, as a host timer would.
    if let Some(wakeup) = list.next_wakeup_ms() {
        list.tick(wakeup);
    }
    render(&rows, &list.snapshot());

    // Reversing keeps the count; only the rendered labels change.
    rows.reverse();
    list.set_count(rows.len());
    render(&rows, &list.snapshot());

    list.detach();
}
