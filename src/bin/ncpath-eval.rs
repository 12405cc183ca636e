use std::{env, fs};
use ncpath::eval::{Axis, Coords, Interpreter, NUM_AXES};
use ncpath::kins::ScalarKins;
use ncpath::machine::Machine;

fn main() {
    let filename = env::args().nth(1).expect("file name required");
    let input = match fs::read_to_string(&filename) {
        Ok(input) => input,
        Err(e) => return eprintln!("Cannot read {}: {}", filename, e),
    };

    let mut machine = Machine::new(Interpreter::with_axes(vec![Axis::X, Axis::Y, Axis::Z]));
    if let Err(e) = machine.run(&input) {
        eprintln!("{}", e);
    }

    let kins = ScalarKins::new(Coords([1.; NUM_AXES]));
    while let Some(path) = machine.queue_mut().dequeue() {
        println!("{} path, feed {}", path.kind, path.feed);
        for axis in &[Axis::X, Axis::Y, Axis::Z] {
            println!("  {}: {:?} ({})", axis, path.row(*axis), path.axis_type(*axis));
        }
        println!("  midpoint: {:?}", kins.pose(&path, 0.5));
        println!("  end: {:?}, error: {:?}", path.end, path.position_error);
    }
}
