// Example: minimal usage and scroll-to helper.
use fixed_list::{Align, ListOptions};

fn main() {
    let opts = ListOptions::new(10_000, 40, 600);

    let w = opts.window_at(4_000);
    println!("total_size={}", w.total_size);
    println!("range={:?}", w.range);
    println!("first={:?}", w.iter().next());

    let off = opts.scroll_to_index_offset(9_999, Align::End, 4_000);
    let w = opts.window_at(off as i64);
    println!("after scroll_to_index: offset={off} range={:?}", w.range);
}
