use std::{
    fmt::Display,
    io::{self, ErrorKind},
};

use log::Level;
use typed_error::{
    chain_has_tag, chain_matches, error_recursive_msg, find_tagged, log_error_chain, wrap,
    ErrorTag, TagResultExt, TaggedError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OrderKind {
    NotFound,
    OutOfStock,
}

impl Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderKind::NotFound => f.write_str("ORDER_NOT_FOUND"),
            OrderKind::OutOfStock => f.write_str("ORDER_OUT_OF_STOCK"),
        }
    }
}

impl ErrorTag for OrderKind {
    type Repr = i32;

    fn repr(&self) -> i32 {
        *self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PaymentKind(i32);

impl Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PAYMENT_{}", self.0)
    }
}

impl ErrorTag for PaymentKind {
    type Repr = i32;

    fn repr(&self) -> i32 {
        self.0
    }
}

fn load_order(id: u32) -> Result<(), TaggedError<OrderKind>> {
    let res: Result<(), io::Error> = Err(io::Error::new(
        ErrorKind::NotFound,
        format!("no row for order {id}"),
    ));
    res.tag_err(OrderKind::NotFound)
}

fn main() {
    env_logger::builder().filter_level(log::LevelFilter::Trace).init();

    let err = match load_order(42).with_context_msg("checkout") {
        Ok(()) => return,
        Err(err) => err,
    };

    println!("err msg={err}");
    println!("err={err:?}");
    println!("recursive msg={}", error_recursive_msg(&err));
    println!();

    let probe = wrap(OrderKind::NotFound, io::Error::other("probe"));
    println!("matches ORDER_NOT_FOUND: {}", chain_matches(&err, &probe));
    println!(
        "has ORDER_OUT_OF_STOCK: {}",
        chain_has_tag(&err, OrderKind::OutOfStock)
    );
    println!(
        "has PAYMENT_0 (same repr as ORDER_NOT_FOUND): {}",
        chain_has_tag(&err, PaymentKind(0))
    );

    if let Some(tagged) = find_tagged::<OrderKind>(&err) {
        println!("found tag={} repr={}", tagged.tag(), tagged.tag().repr());
    }
    println!();

    log_error_chain(&err, Level::Warn);
}
