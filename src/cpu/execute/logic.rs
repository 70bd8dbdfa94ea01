//! Logic and rotate instruction handlers (ANA, ORA, XRA, CMA, rotates)
//!
//! The logic family always clears C. ANA sets AC to bit 3 of the OR of
//! the operands; ORA and XRA clear it. The four rotates touch only C.

use crate::cpu::state::{Cpu, Reg};
use crate::io::IoDevice;
use crate::memory::Memory;

/// AND `operand` into A
fn and(cpu: &mut Cpu, operand: u8) {
    let result = cpu.a & operand;
    cpu.set_szp(result);
    cpu.set_flag(Cpu::AF, (cpu.a | operand) & 0x08 != 0);
    cpu.set_flag(Cpu::CF, false);
    cpu.a = result;
}

/// OR `operand` into A
fn or(cpu: &mut Cpu, operand: u8) {
    let result = cpu.a | operand;
    cpu.set_szp(result);
    cpu.set_flag(Cpu::AF, false);
    cpu.set_flag(Cpu::CF, false);
    cpu.a = result;
}

/// XOR `operand` into A
fn xor(cpu: &mut Cpu, operand: u8) {
    let result = cpu.a ^ operand;
    cpu.set_szp(result);
    cpu.set_flag(Cpu::AF, false);
    cpu.set_flag(Cpu::CF, false);
    cpu.a = result;
}

/// ANA r / ANA M - AND register with A
/// Opcodes: 0xA0-0xA7
pub fn ana_r(cpu: &mut Cpu, mem: &mut Memory, _io: &mut dyn IoDevice, opcode: u8) {
    let value = cpu.read_reg(mem, Reg::from_bits(opcode));
    and(cpu, value);
}

/// XRA r / XRA M - XOR register with A
/// Opcodes: 0xA8-0xAF
pub fn xra_r(cpu: &mut Cpu, mem: &mut Memory, _io: &mut dyn IoDevice, opcode: u8) {
    let value = cpu.read_reg(mem, Reg::from_bits(opcode));
    xor(cpu, value);
}

/// ORA r / ORA M - OR register with A
/// Opcodes: 0xB0-0xB7
pub fn ora_r(cpu: &mut Cpu, mem: &mut Memory, _io: &mut dyn IoDevice, opcode: u8) {
    let value = cpu.read_reg(mem, Reg::from_bits(opcode));
    or(cpu, value);
}

/// ANI - AND immediate with A
/// Opcode: 0xE6
pub fn ani(cpu: &mut Cpu, mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let value = cpu.fetch_u8(mem);
    and(cpu, value);
}

/// XRI - XOR immediate with A
/// Opcode: 0xEE
pub fn xri(cpu: &mut Cpu, mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let value = cpu.fetch_u8(mem);
    xor(cpu, value);
}

/// ORI - OR immediate with A
/// Opcode: 0xF6
pub fn ori(cpu: &mut Cpu, mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let value = cpu.fetch_u8(mem);
    or(cpu, value);
}

/// CMA - Complement A (no flags)
/// Opcode: 0x2F
pub fn cma(cpu: &mut Cpu, _mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    cpu.a ^= 0xFF;
}

/// RLC - Rotate A left; bit 7 goes to C and bit 0
/// Opcode: 0x07
pub fn rlc(cpu: &mut Cpu, _mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let carry = cpu.a >> 7;
    cpu.set_flag(Cpu::CF, carry != 0);
    cpu.a = (cpu.a << 1) | carry;
}

/// RRC - Rotate A right; bit 0 goes to C and bit 7
/// Opcode: 0x0F
pub fn rrc(cpu: &mut Cpu, _mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let carry = cpu.a & 0x01;
    cpu.set_flag(Cpu::CF, carry != 0);
    cpu.a = (cpu.a >> 1) | (carry << 7);
}

/// RAL - Rotate A left through carry (9-bit rotate)
/// Opcode: 0x17
pub fn ral(cpu: &mut Cpu, _mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let old_carry = cpu.get_flag(Cpu::CF) as u8;
    cpu.set_flag(Cpu::CF, cpu.a & 0x80 != 0);
    cpu.a = (cpu.a << 1) | old_carry;
}

/// RAR - Rotate A right through carry (9-bit rotate)
/// Opcode: 0x1F
pub fn rar(cpu: &mut Cpu, _mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let old_carry = cpu.get_flag(Cpu::CF) as u8;
    cpu.set_flag(Cpu::CF, cpu.a & 0x01 != 0);
    cpu.a = (cpu.a >> 1) | (old_carry << 7);
}

/// STC - Set carry (other flags untouched)
/// Opcode: 0x37
pub fn stc(cpu: &mut Cpu, _mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    cpu.set_flag(Cpu::CF, true);
}

/// CMC - Complement carry (other flags untouched)
/// Opcode: 0x3F
pub fn cmc(cpu: &mut Cpu, _mem: &mut Memory, _io: &mut dyn IoDevice, _opcode: u8) {
    let carry = cpu.get_flag(Cpu::CF);
    cpu.set_flag(Cpu::CF, !carry);
}
