//! Builder pattern: step-by-step vehicle construction
//! Example: the shop drives every builder through the same steps
//!
//! Run with: cargo run --bin builder

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

trait Vehicle {
    fn describe(&self, log: &mut TraceLog);
}

struct Car {
    doors: u32,
}

impl Vehicle for Car {
    fn describe(&self, log: &mut TraceLog) {
        log.add(format!("I am a {}-door car", self.doors));
    }
}

struct Truck {
    doors: u32,
}

impl Vehicle for Truck {
    fn describe(&self, log: &mut TraceLog) {
        log.add(format!("I am a {}-door truck", self.doors));
    }
}

/// Construction steps, separate from the product they assemble.
/// `finish` consumes the builder, so a half-built vehicle can never be
/// taken out of it.
trait VehicleBuilder {
    type Output: Vehicle;

    fn assemble_frame(&mut self);
    fn add_parts(&mut self);
    fn finish(self) -> Self::Output;
}

#[derive(Default)]
struct CarBuilder {
    doors: u32,
}

impl VehicleBuilder for CarBuilder {
    type Output = Car;

    fn assemble_frame(&mut self) {
        self.doors = 0;
    }

    fn add_parts(&mut self) {
        self.doors = 4;
    }

    fn finish(self) -> Car {
        Car { doors: self.doors }
    }
}

#[derive(Default)]
struct TruckBuilder {
    doors: u32,
}

impl VehicleBuilder for TruckBuilder {
    type Output = Truck;

    fn assemble_frame(&mut self) {
        self.doors = 0;
    }

    fn add_parts(&mut self) {
        self.doors = 2;
    }

    fn finish(self) -> Truck {
        Truck { doors: self.doors }
    }
}

struct Shop;

impl Shop {
    /// The construction process is fixed; the builder decides what it
    /// yields.
    fn construct<B: VehicleBuilder>(&self, mut builder: B) -> B::Output {
        builder.assemble_frame();
        builder.add_parts();
        builder.finish()
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let shop = Shop;
    let car = shop.construct(CarBuilder::default());
    let truck = shop.construct(TruckBuilder::default());

    car.describe(&mut log);
    truck.describe(&mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Builder"));
}
