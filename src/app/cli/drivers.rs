use crate::domain::driver::known_drivers;

pub(super) fn run_drivers() {
    for known in known_drivers() {
        println!("{:<10} {:<10} {}", known.name, known.dialect, known.import);
    }
}
