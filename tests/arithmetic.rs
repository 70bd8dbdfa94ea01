//! Tests for the arithmetic instruction family
//!
//! Every scenario pins down a concrete flag outcome, including the
//! auxiliary-carry behavior of the subtract family.

use vm80::cpu::{Cpu, CpuHarness};

#[test]
fn test_daa_after_9b() {
    let mut harness = CpuHarness::new();

    // MVI A,0x9B; DAA
    harness.load_program(&[0x3E, 0x9B, 0x27], 0);
    harness.step_n(2);

    assert_eq!(harness.cpu.a, 0x01);
    assert!(harness.cpu.get_flag(Cpu::CF));
    assert!(harness.cpu.get_flag(Cpu::AF));
}

#[test]
fn test_add_sets_sign_aux_parity() {
    let mut harness = CpuHarness::new();

    // MVI A,0x6C; MVI B,0x2E; ADD B
    harness.load_program(&[0x3E, 0x6C, 0x06, 0x2E, 0x80], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.a, 0x9A);
    assert!(harness.cpu.get_flag(Cpu::SF));
    assert!(!harness.cpu.get_flag(Cpu::ZF));
    assert!(harness.cpu.get_flag(Cpu::AF));
    assert!(harness.cpu.get_flag(Cpu::PF));
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_adc_without_carry() {
    let mut harness = CpuHarness::new();

    // MVI A,0x42; MVI B,0x3D; ADC B
    harness.load_program(&[0x3E, 0x42, 0x06, 0x3D, 0x88], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.a, 0x7F);
    assert!(!harness.cpu.get_flag(Cpu::SF));
    assert!(!harness.cpu.get_flag(Cpu::AF));
    assert!(!harness.cpu.get_flag(Cpu::PF));
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_adc_with_carry_preset() {
    let mut harness = CpuHarness::new();
    harness.cpu.set_flag(Cpu::CF, true);

    // MVI A,0x42; MVI B,0x3D; ADC B (MVI leaves flags alone)
    harness.load_program(&[0x3E, 0x42, 0x06, 0x3D, 0x88], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.a, 0x80);
    assert!(harness.cpu.get_flag(Cpu::SF));
    assert!(!harness.cpu.get_flag(Cpu::ZF));
    assert!(harness.cpu.get_flag(Cpu::AF));
    assert!(!harness.cpu.get_flag(Cpu::PF));
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_sub_a_from_a() {
    let mut harness = CpuHarness::new();

    // MVI A,0x3E; SUB A
    harness.load_program(&[0x3E, 0x3E, 0x97], 0);
    harness.step_n(2);

    assert_eq!(harness.cpu.a, 0x00);
    assert!(!harness.cpu.get_flag(Cpu::SF));
    assert!(harness.cpu.get_flag(Cpu::ZF));
    assert!(harness.cpu.get_flag(Cpu::AF));
    assert!(harness.cpu.get_flag(Cpu::PF));
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_sui_underflow() {
    let mut harness = CpuHarness::new();

    // MVI A,0x00; SUI 0x01
    harness.load_program(&[0x3E, 0x00, 0xD6, 0x01], 0);
    harness.step_n(2);

    assert_eq!(harness.cpu.a, 0xFF);
    assert!(harness.cpu.get_flag(Cpu::SF));
    assert!(!harness.cpu.get_flag(Cpu::ZF));
    assert!(!harness.cpu.get_flag(Cpu::AF));
    assert!(harness.cpu.get_flag(Cpu::PF));
    assert!(harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_sbi_underflow_with_borrow() {
    let mut harness = CpuHarness::new();
    harness.cpu.set_flag(Cpu::CF, true);

    // MVI A,0x00; SBI 0x01
    harness.load_program(&[0x3E, 0x00, 0xDE, 0x01], 0);
    harness.step_n(2);

    assert_eq!(harness.cpu.a, 0xFE);
    assert!(harness.cpu.get_flag(Cpu::SF));
    assert!(!harness.cpu.get_flag(Cpu::ZF));
    assert!(!harness.cpu.get_flag(Cpu::AF));
    assert!(!harness.cpu.get_flag(Cpu::PF));
    assert!(harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_sbb_with_borrow() {
    let mut harness = CpuHarness::new();
    harness.cpu.set_flag(Cpu::CF, true);

    // MVI A,4; MVI B,2; SBB B -> 4 - 2 - 1 = 1
    harness.load_program(&[0x3E, 0x04, 0x06, 0x02, 0x98], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.a, 0x01);
    assert!(!harness.cpu.get_flag(Cpu::SF));
    assert!(!harness.cpu.get_flag(Cpu::ZF));
    assert!(harness.cpu.get_flag(Cpu::AF));
    assert!(!harness.cpu.get_flag(Cpu::PF));
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_adi_carry_out() {
    let mut harness = CpuHarness::new();

    // MVI A,0x56; ADI 0xBE -> 0x114, truncated to 0x14 with carry
    harness.load_program(&[0x3E, 0x56, 0xC6, 0xBE], 0);
    harness.step_n(2);

    assert_eq!(harness.cpu.a, 0x14);
    assert!(!harness.cpu.get_flag(Cpu::SF));
    assert!(harness.cpu.get_flag(Cpu::AF));
    assert!(harness.cpu.get_flag(Cpu::PF));
    assert!(harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_add_through_m() {
    let mut harness = CpuHarness::new();
    harness.mem.write_u8(0x2000, 0x11);

    // LXI H,0x2000; MVI A,0x22; ADD M
    harness.load_program(&[0x21, 0x00, 0x20, 0x3E, 0x22, 0x86], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.a, 0x33);
}

#[test]
fn test_cmp_leaves_a_unchanged() {
    let mut harness = CpuHarness::new();

    // MVI A,0x10; MVI B,0x20; CMP B
    harness.load_program(&[0x3E, 0x10, 0x06, 0x20, 0xB8], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.a, 0x10);
    assert!(harness.cpu.get_flag(Cpu::CF)); // 0x10 < 0x20 borrows
    assert!(!harness.cpu.get_flag(Cpu::ZF));
}

#[test]
fn test_cpi_equal_sets_zero() {
    let mut harness = CpuHarness::new();

    // MVI A,0x42; CPI 0x42
    harness.load_program(&[0x3E, 0x42, 0xFE, 0x42], 0);
    harness.step_n(2);

    assert_eq!(harness.cpu.a, 0x42);
    assert!(harness.cpu.get_flag(Cpu::ZF));
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_inr_wraps_and_leaves_carry() {
    let mut harness = CpuHarness::new();
    harness.cpu.set_flag(Cpu::CF, true);

    // MVI B,0xFF; INR B
    harness.load_program(&[0x06, 0xFF, 0x04], 0);
    harness.step_n(2);

    assert_eq!(harness.cpu.b, 0x00);
    assert!(harness.cpu.get_flag(Cpu::ZF));
    assert!(harness.cpu.get_flag(Cpu::AF)); // low nibble rolled to 0
    assert!(harness.cpu.get_flag(Cpu::CF)); // INR never touches carry
}

#[test]
fn test_dcr_aux_carry_rule() {
    let mut harness = CpuHarness::new();

    // MVI C,0x10; DCR C -> pre-value low nibble is 0, so AC clear
    harness.load_program(&[0x0E, 0x10, 0x0D], 0);
    harness.step_n(2);
    assert_eq!(harness.cpu.c, 0x0F);
    assert!(!harness.cpu.get_flag(Cpu::AF));

    // MVI C,0x11; DCR C -> pre-value low nibble nonzero, AC set
    harness.load_program(&[0x0E, 0x11, 0x0D], 0x100);
    harness.step_n(2);
    assert_eq!(harness.cpu.c, 0x10);
    assert!(harness.cpu.get_flag(Cpu::AF));
}

#[test]
fn test_inr_dcr_through_m() {
    let mut harness = CpuHarness::new();
    harness.mem.write_u8(0x3000, 0x7F);

    // LXI H,0x3000; INR M; DCR M
    harness.load_program(&[0x21, 0x00, 0x30, 0x34, 0x35], 0);
    harness.step_n(2);
    assert_eq!(harness.mem.read_u8(0x3000), 0x80);
    assert!(harness.cpu.get_flag(Cpu::SF));
    harness.step();
    assert_eq!(harness.mem.read_u8(0x3000), 0x7F);
}

#[test]
fn test_dad_carry() {
    let mut harness = CpuHarness::new();

    // LXI H,0xFFFF; LXI B,0x0001; DAD B
    harness.load_program(&[0x21, 0xFF, 0xFF, 0x01, 0x01, 0x00, 0x09], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.hl(), 0x0000);
    assert!(harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_dad_sp() {
    let mut harness = CpuHarness::new();

    // LXI SP,0x1234; LXI H,0x1000; DAD SP
    harness.load_program(&[0x31, 0x34, 0x12, 0x21, 0x00, 0x10, 0x39], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.hl(), 0x2234);
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_inx_dcx_wrap_without_flags() {
    let mut harness = CpuHarness::new();

    // LXI D,0xFFFF; INX D; DCX D; DCX D
    harness.load_program(&[0x11, 0xFF, 0xFF, 0x13, 0x1B, 0x1B], 0);
    harness.step_n(2);
    assert_eq!(harness.cpu.de(), 0x0000);
    assert!(!harness.cpu.get_flag(Cpu::ZF)); // no flag effects
    harness.step_n(2);
    assert_eq!(harness.cpu.de(), 0xFFFE);

    // INX SP wraps too
    harness.load_program(&[0x31, 0xFF, 0xFF, 0x33], 0x100);
    harness.step_n(2);
    assert_eq!(harness.cpu.sp, 0x0000);
}

#[test]
fn test_daa_on_packed_bcd_add() {
    let mut harness = CpuHarness::new();

    // 19 + 28 = 47 in BCD: MVI A,0x19; ADI 0x28; DAA
    harness.load_program(&[0x3E, 0x19, 0xC6, 0x28, 0x27], 0);
    harness.step_n(3);

    assert_eq!(harness.cpu.a, 0x47);
    assert!(!harness.cpu.get_flag(Cpu::CF));
}
