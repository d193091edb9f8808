#![no_main]
use libfuzzer_sys::fuzz_target;

use rpnex::RpnBrain;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut brain = RpnBrain::<f64>::new();
        brain.import_program(s.split_whitespace());
        let _ = brain.evaluate();
        let _ = brain.render();
        let _ = s.parse::<RpnBrain<f64>>();
    }
});
