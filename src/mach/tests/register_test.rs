use crate::mach::{Registers, NUM_REGISTERS};

#[test]
fn test_zero_at_power_on() {
    let registers = Registers::new();
    for index in 0..NUM_REGISTERS {
        assert_eq!(registers.get(index).unwrap(), 0);
    }
}

#[test]
fn test_set_then_get() {
    let mut registers = Registers::new();
    registers.set(7, 123).unwrap();
    assert_eq!(registers.get(7).unwrap(), 123);
    assert_eq!(registers.get(6).unwrap(), 0);
}

#[test]
fn test_index_out_of_range() {
    let mut registers = Registers::new();
    assert_eq!(
        registers.get(NUM_REGISTERS).unwrap_err().to_string(),
        "REGISTER INDEX OUT OF RANGE"
    );
    assert!(registers.set(NUM_REGISTERS, 0).is_err());
}
