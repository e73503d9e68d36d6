use std::collections::HashSet;

use tinct_common::{ImmLoc, Location, RegLoc};

use super::{Kind, Operand};
use crate::error::{OperandError, Operation};
use crate::size::ByteSize;

fn imm(value: &str, index: usize) -> Location {
    ImmLoc::new(value, index).into()
}

fn reg(name: &str, index: usize) -> Location {
    RegLoc::new(name, index).into()
}

#[test]
fn immediate_locations_high_byte_first() {
    let operand = Operand::immediate("0x1234", "WORD");

    let expected = vec![imm("0x12", 1), imm("0x34", 0)];
    let actual = operand.locations().unwrap();

    assert_eq!(expected, actual);
}

#[test]
fn immediate_locations_zero_padded() {
    let operand = Operand::immediate("10", "DWORD");

    let expected = vec![
        imm("0x00", 3),
        imm("0x00", 2),
        imm("0x00", 1),
        imm("0x0a", 0),
    ];
    let actual = operand.locations().unwrap();

    assert_eq!(expected, actual);
}

#[test]
fn immediate_locations_keep_low_bytes_of_wide_literal() {
    let operand = Operand::immediate("0x123456", "WORD");

    let expected = vec![imm("0x34", 1), imm("0x56", 0)];
    let actual = operand.locations().unwrap();

    assert_eq!(expected, actual);
}

#[test]
fn zero_width_immediate_has_no_locations() {
    let operand = Operand::immediate("5", "TBYTE");

    assert_eq!(ByteSize::Bytes(0), operand.size_in_bytes());
    assert_eq!(Vec::<Location>::new(), operand.locations().unwrap());
}

#[test]
fn register_locations_by_index() {
    let operand = Operand::register("eax", "DWORD");

    let expected = vec![reg("eax", 0), reg("eax", 1), reg("eax", 2), reg("eax", 3)];
    let actual = operand.locations().unwrap();

    assert_eq!(expected, actual);
    assert!(actual.iter().all(|loc| !loc.is_immediate()));
}

#[test]
fn single_bit_operand_has_no_locations() {
    let flag = Operand::register("zf", "1");

    assert_eq!(1, flag.size_in_bits());
    assert_eq!(ByteSize::Undefined, flag.size_in_bytes());
    assert_eq!(
        Err(OperandError::UndefinedByteSize {
            name: "zf".into(),
            bits: 1
        }),
        flag.locations()
    );

    let bit = Operand::immediate("1", "1");
    assert!(matches!(
        bit.locations(),
        Err(OperandError::UndefinedByteSize { bits: 1, .. })
    ));
}

#[test]
fn memory_operands_refuse_locations() {
    for operand in [
        Operand::address("0x8048000", "DWORD"),
        Operand::pointer_to_address("0x8048000", "DWORD"),
        Operand::pointer_to_register("esp", "DWORD"),
        Operand::none(),
    ] {
        assert!(matches!(
            operand.locations(),
            Err(OperandError::Unsupported {
                operation: Operation::Locations,
                ..
            })
        ));
    }
}

#[test]
fn negative_immediate_renders_at_operand_width() {
    let operand = Operand::immediate("-1", "DWORD");

    assert_eq!(Ok("imm:0xffffffff".to_string()), operand.canonical());
    assert_eq!(
        vec![
            imm("0xff", 3),
            imm("0xff", 2),
            imm("0xff", 1),
            imm("0xff", 0)
        ],
        operand.locations().unwrap()
    );

    let wide = Operand::immediate("-0x10", "QWORD");
    assert_eq!(Ok("imm:0xfffffffffffffff0".to_string()), wide.canonical());
}

#[test]
fn signed_garbage_is_not_a_value() {
    for name in ["++5", "-+5", "0x+5", "+0x+ff"] {
        let operand = Operand::immediate(name, "DWORD");

        assert!(matches!(
            operand.value(),
            Err(OperandError::MalformedLiteral { .. })
        ));
        assert!(matches!(
            operand.locations(),
            Err(OperandError::MalformedLiteral { .. })
        ));
    }
}

#[test]
fn literal_values() {
    assert_eq!(Ok(10), Operand::immediate("10", "DWORD").value());
    assert_eq!(Ok(16), Operand::immediate("0x10", "DWORD").value());
    assert_eq!(Ok(0x8048000), Operand::address("0x8048000", "DWORD").value());
}

#[test]
fn malformed_literal_is_catchable() {
    let operand = Operand::immediate("0xgg", "BYTE");

    assert!(matches!(
        operand.value(),
        Err(OperandError::MalformedLiteral { .. })
    ));
    assert!(matches!(
        operand.canonical(),
        Err(OperandError::MalformedLiteral { .. })
    ));
    assert!(matches!(
        operand.locations(),
        Err(OperandError::MalformedLiteral { .. })
    ));
}

#[test]
fn register_value_must_be_set_first() {
    let mut operand = Operand::register("eax", "DWORD");

    assert_eq!(
        Err(OperandError::UnsetValue { name: "eax".into() }),
        operand.value()
    );

    operand.set_value(42).unwrap();
    assert_eq!(Ok(42), operand.value());
    assert_eq!(Kind::Register { value: Some(42) }, operand.kind());
}

#[test]
fn only_registers_accept_values() {
    let mut operands = [
        Operand::immediate("1", "BYTE"),
        Operand::address("0x10", "DWORD"),
        Operand::pointer_to_address("0x10", "DWORD"),
        Operand::pointer_to_register("esp", "DWORD"),
        Operand::none(),
    ];

    for operand in operands.iter_mut() {
        assert_eq!(
            Err(OperandError::Unsupported {
                operation: Operation::SetValue,
                kind: operand.kind().tag(),
            }),
            operand.set_value(1)
        );
    }
}

#[test]
fn memory_operands_have_no_value() {
    for operand in [
        Operand::pointer_to_address("0x10", "DWORD"),
        Operand::pointer_to_register("esp", "DWORD"),
        Operand::none(),
    ] {
        assert!(matches!(
            operand.value(),
            Err(OperandError::Unsupported {
                operation: Operation::Value,
                ..
            })
        ));
    }
}

#[test]
fn classification() {
    let cases = [
        (Operand::immediate("1", "BYTE"), false, false),
        (Operand::address("0x10", "DWORD"), false, false),
        (Operand::register("eax", "DWORD"), true, false),
        (Operand::pointer_to_address("0x10", "DWORD"), true, true),
        (Operand::pointer_to_register("esp", "DWORD"), true, true),
    ];

    for (operand, var, mem) in cases {
        assert_eq!(var, operand.is_var(), "{operand:?}");
        assert_eq!(Ok(mem), operand.is_mem(), "{operand:?}");
    }
}

#[test]
fn empty_operand_has_no_memory_answer() {
    let operand = Operand::none();

    assert!(!operand.is_var());
    assert_eq!(
        Err(OperandError::EmptyOperand {
            operation: Operation::IsMem
        }),
        operand.is_mem()
    );
}

#[test]
fn canonical_forms() {
    let cases = [
        (Operand::immediate("0xff", "WORD"), "imm:0x00ff"),
        (Operand::immediate("10", "DWORD"), "imm:0x0000000a"),
        (Operand::address("0x8048000", "DWORD"), "imm:0x08048000"),
        (Operand::pointer_to_address("16", "WORD"), "*(imm:0x0010)"),
        (Operand::pointer_to_register("esp", "DWORD"), "*(reg:esp)"),
        (Operand::register("eax", "DWORD"), "eax"),
        (Operand::none(), ""),
    ];

    for (operand, expected) in cases {
        assert_eq!(Ok(expected.to_string()), operand.canonical());
    }
}

#[test]
fn resize_recomputes_sizes() {
    let mut operand = Operand::immediate("0x1234", "DWORD");
    assert_eq!(ByteSize::Bytes(4), operand.size_in_bytes());

    operand.resize("BYTE");
    assert_eq!(8, operand.size());
    assert_eq!(ByteSize::Bytes(1), operand.size_in_bytes());
    assert_eq!(vec![imm("0x34", 0)], operand.locations().unwrap());
    assert_eq!(Ok("imm:0x1234".to_string()), operand.canonical());

    operand.resize("DWORD");
    assert_eq!(ByteSize::Bytes(4), operand.size_in_bytes());
    assert_eq!(4, operand.locations().unwrap().len());
    assert_eq!(Ok("imm:0x00001234".to_string()), operand.canonical());
}

#[test]
fn clone_is_independent() {
    let mut original = Operand::register("eax", "DWORD");
    let copy = original.clone();

    original.set_value(7).unwrap();
    original.resize("WORD");

    assert!(copy.value().is_err());
    assert_eq!(32, copy.size_in_bits());
}

#[test]
fn identity_is_by_name() {
    let a = Operand::register("eax", "DWORD");
    let b = Operand::register("eax", "WORD");
    let c = Operand::register("ebx", "DWORD");

    assert_eq!(a, b);
    assert!(a < c);

    let set: HashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(2, set.len());
}

#[test]
fn kind_tags_round_trip() {
    for tag in ["imm", "addr", "reg", "paddr", "preg", "none"] {
        assert_eq!(Some(tag), Kind::from_tag(tag).map(|kind| kind.tag()));
    }

    assert_eq!(None, Kind::from_tag("mem"));
}
