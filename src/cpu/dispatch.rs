//! Opcode dispatch table
//!
//! Maps all 256 opcodes to their handler functions. Duplicated
//! encodings observed on real silicon are aliased here rather than
//! treated as faults: 0x08/0x10/0x18/0x20/0x28/0x30/0x38 are NOP,
//! 0xCB is JMP, 0xD9 is RET, and 0xDD/0xED/0xFD are CALL.

use crate::cpu::execute::*;
use crate::cpu::state::Cpu;
use crate::io::IoDevice;
use crate::memory::Memory;

/// Instruction handler function signature
///
/// Receives CPU state, memory, the I/O device, and the opcode byte;
/// handlers decode register fields from the opcode themselves.
pub type OpcodeHandler = fn(&mut Cpu, &mut Memory, &mut dyn IoDevice, u8);

/// Dispatch table with 256 entries, one for each possible opcode
pub static DISPATCH_TABLE: [OpcodeHandler; 256] = [
    // 0x00-0x0F
    nop,                      // 0x00: NOP
    data_transfer::lxi,       // 0x01: LXI B,d16
    data_transfer::stax,      // 0x02: STAX B
    arithmetic::inx,          // 0x03: INX B
    arithmetic::inr_r,        // 0x04: INR B
    arithmetic::dcr_r,        // 0x05: DCR B
    data_transfer::mvi_r,     // 0x06: MVI B,d8
    logic::rlc,               // 0x07: RLC
    nop,                      // 0x08: NOP (undocumented alias)
    arithmetic::dad,          // 0x09: DAD B
    data_transfer::ldax,      // 0x0A: LDAX B
    arithmetic::dcx,          // 0x0B: DCX B
    arithmetic::inr_r,        // 0x0C: INR C
    arithmetic::dcr_r,        // 0x0D: DCR C
    data_transfer::mvi_r,     // 0x0E: MVI C,d8
    logic::rrc,               // 0x0F: RRC
    // 0x10-0x1F
    nop,                      // 0x10: NOP (undocumented alias)
    data_transfer::lxi,       // 0x11: LXI D,d16
    data_transfer::stax,      // 0x12: STAX D
    arithmetic::inx,          // 0x13: INX D
    arithmetic::inr_r,        // 0x14: INR D
    arithmetic::dcr_r,        // 0x15: DCR D
    data_transfer::mvi_r,     // 0x16: MVI D,d8
    logic::ral,               // 0x17: RAL
    nop,                      // 0x18: NOP (undocumented alias)
    arithmetic::dad,          // 0x19: DAD D
    data_transfer::ldax,      // 0x1A: LDAX D
    arithmetic::dcx,          // 0x1B: DCX D
    arithmetic::inr_r,        // 0x1C: INR E
    arithmetic::dcr_r,        // 0x1D: DCR E
    data_transfer::mvi_r,     // 0x1E: MVI E,d8
    logic::rar,               // 0x1F: RAR
    // 0x20-0x2F
    nop,                      // 0x20: NOP (undocumented alias)
    data_transfer::lxi,       // 0x21: LXI H,d16
    data_transfer::shld,      // 0x22: SHLD a16
    arithmetic::inx,          // 0x23: INX H
    arithmetic::inr_r,        // 0x24: INR H
    arithmetic::dcr_r,        // 0x25: DCR H
    data_transfer::mvi_r,     // 0x26: MVI H,d8
    arithmetic::daa,          // 0x27: DAA
    nop,                      // 0x28: NOP (undocumented alias)
    arithmetic::dad,          // 0x29: DAD H
    data_transfer::lhld,      // 0x2A: LHLD a16
    arithmetic::dcx,          // 0x2B: DCX H
    arithmetic::inr_r,        // 0x2C: INR L
    arithmetic::dcr_r,        // 0x2D: DCR L
    data_transfer::mvi_r,     // 0x2E: MVI L,d8
    logic::cma,               // 0x2F: CMA
    // 0x30-0x3F
    nop,                      // 0x30: NOP (undocumented alias)
    data_transfer::lxi,       // 0x31: LXI SP,d16
    data_transfer::sta,       // 0x32: STA a16
    arithmetic::inx,          // 0x33: INX SP
    arithmetic::inr_r,        // 0x34: INR M
    arithmetic::dcr_r,        // 0x35: DCR M
    data_transfer::mvi_r,     // 0x36: MVI M,d8
    logic::stc,               // 0x37: STC
    nop,                      // 0x38: NOP (undocumented alias)
    arithmetic::dad,          // 0x39: DAD SP
    data_transfer::lda,       // 0x3A: LDA a16
    arithmetic::dcx,          // 0x3B: DCX SP
    arithmetic::inr_r,        // 0x3C: INR A
    arithmetic::dcr_r,        // 0x3D: DCR A
    data_transfer::mvi_r,     // 0x3E: MVI A,d8
    logic::cmc,               // 0x3F: CMC
    // 0x40-0x4F: MOV destination B/C
    data_transfer::mov_r_r,   // 0x40: MOV B,B
    data_transfer::mov_r_r,   // 0x41: MOV B,C
    data_transfer::mov_r_r,   // 0x42: MOV B,D
    data_transfer::mov_r_r,   // 0x43: MOV B,E
    data_transfer::mov_r_r,   // 0x44: MOV B,H
    data_transfer::mov_r_r,   // 0x45: MOV B,L
    data_transfer::mov_r_r,   // 0x46: MOV B,M
    data_transfer::mov_r_r,   // 0x47: MOV B,A
    data_transfer::mov_r_r,   // 0x48: MOV C,B
    data_transfer::mov_r_r,   // 0x49: MOV C,C
    data_transfer::mov_r_r,   // 0x4A: MOV C,D
    data_transfer::mov_r_r,   // 0x4B: MOV C,E
    data_transfer::mov_r_r,   // 0x4C: MOV C,H
    data_transfer::mov_r_r,   // 0x4D: MOV C,L
    data_transfer::mov_r_r,   // 0x4E: MOV C,M
    data_transfer::mov_r_r,   // 0x4F: MOV C,A
    // 0x50-0x5F: MOV destination D/E
    data_transfer::mov_r_r,   // 0x50: MOV D,B
    data_transfer::mov_r_r,   // 0x51: MOV D,C
    data_transfer::mov_r_r,   // 0x52: MOV D,D
    data_transfer::mov_r_r,   // 0x53: MOV D,E
    data_transfer::mov_r_r,   // 0x54: MOV D,H
    data_transfer::mov_r_r,   // 0x55: MOV D,L
    data_transfer::mov_r_r,   // 0x56: MOV D,M
    data_transfer::mov_r_r,   // 0x57: MOV D,A
    data_transfer::mov_r_r,   // 0x58: MOV E,B
    data_transfer::mov_r_r,   // 0x59: MOV E,C
    data_transfer::mov_r_r,   // 0x5A: MOV E,D
    data_transfer::mov_r_r,   // 0x5B: MOV E,E
    data_transfer::mov_r_r,   // 0x5C: MOV E,H
    data_transfer::mov_r_r,   // 0x5D: MOV E,L
    data_transfer::mov_r_r,   // 0x5E: MOV E,M
    data_transfer::mov_r_r,   // 0x5F: MOV E,A
    // 0x60-0x6F: MOV destination H/L
    data_transfer::mov_r_r,   // 0x60: MOV H,B
    data_transfer::mov_r_r,   // 0x61: MOV H,C
    data_transfer::mov_r_r,   // 0x62: MOV H,D
    data_transfer::mov_r_r,   // 0x63: MOV H,E
    data_transfer::mov_r_r,   // 0x64: MOV H,H
    data_transfer::mov_r_r,   // 0x65: MOV H,L
    data_transfer::mov_r_r,   // 0x66: MOV H,M
    data_transfer::mov_r_r,   // 0x67: MOV H,A
    data_transfer::mov_r_r,   // 0x68: MOV L,B
    data_transfer::mov_r_r,   // 0x69: MOV L,C
    data_transfer::mov_r_r,   // 0x6A: MOV L,D
    data_transfer::mov_r_r,   // 0x6B: MOV L,E
    data_transfer::mov_r_r,   // 0x6C: MOV L,H
    data_transfer::mov_r_r,   // 0x6D: MOV L,L
    data_transfer::mov_r_r,   // 0x6E: MOV L,M
    data_transfer::mov_r_r,   // 0x6F: MOV L,A
    // 0x70-0x7F: MOV destination M/A; 0x76 is HLT
    data_transfer::mov_r_r,   // 0x70: MOV M,B
    data_transfer::mov_r_r,   // 0x71: MOV M,C
    data_transfer::mov_r_r,   // 0x72: MOV M,D
    data_transfer::mov_r_r,   // 0x73: MOV M,E
    data_transfer::mov_r_r,   // 0x74: MOV M,H
    data_transfer::mov_r_r,   // 0x75: MOV M,L
    hlt,                      // 0x76: HLT (the MOV M,M slot)
    data_transfer::mov_r_r,   // 0x77: MOV M,A
    data_transfer::mov_r_r,   // 0x78: MOV A,B
    data_transfer::mov_r_r,   // 0x79: MOV A,C
    data_transfer::mov_r_r,   // 0x7A: MOV A,D
    data_transfer::mov_r_r,   // 0x7B: MOV A,E
    data_transfer::mov_r_r,   // 0x7C: MOV A,H
    data_transfer::mov_r_r,   // 0x7D: MOV A,L
    data_transfer::mov_r_r,   // 0x7E: MOV A,M
    data_transfer::mov_r_r,   // 0x7F: MOV A,A
    // 0x80-0x8F: ADD, ADC
    arithmetic::add_r,        // 0x80: ADD B
    arithmetic::add_r,        // 0x81: ADD C
    arithmetic::add_r,        // 0x82: ADD D
    arithmetic::add_r,        // 0x83: ADD E
    arithmetic::add_r,        // 0x84: ADD H
    arithmetic::add_r,        // 0x85: ADD L
    arithmetic::add_r,        // 0x86: ADD M
    arithmetic::add_r,        // 0x87: ADD A
    arithmetic::adc_r,        // 0x88: ADC B
    arithmetic::adc_r,        // 0x89: ADC C
    arithmetic::adc_r,        // 0x8A: ADC D
    arithmetic::adc_r,        // 0x8B: ADC E
    arithmetic::adc_r,        // 0x8C: ADC H
    arithmetic::adc_r,        // 0x8D: ADC L
    arithmetic::adc_r,        // 0x8E: ADC M
    arithmetic::adc_r,        // 0x8F: ADC A
    // 0x90-0x9F: SUB, SBB
    arithmetic::sub_r,        // 0x90: SUB B
    arithmetic::sub_r,        // 0x91: SUB C
    arithmetic::sub_r,        // 0x92: SUB D
    arithmetic::sub_r,        // 0x93: SUB E
    arithmetic::sub_r,        // 0x94: SUB H
    arithmetic::sub_r,        // 0x95: SUB L
    arithmetic::sub_r,        // 0x96: SUB M
    arithmetic::sub_r,        // 0x97: SUB A
    arithmetic::sbb_r,        // 0x98: SBB B
    arithmetic::sbb_r,        // 0x99: SBB C
    arithmetic::sbb_r,        // 0x9A: SBB D
    arithmetic::sbb_r,        // 0x9B: SBB E
    arithmetic::sbb_r,        // 0x9C: SBB H
    arithmetic::sbb_r,        // 0x9D: SBB L
    arithmetic::sbb_r,        // 0x9E: SBB M
    arithmetic::sbb_r,        // 0x9F: SBB A
    // 0xA0-0xAF: ANA, XRA
    logic::ana_r,             // 0xA0: ANA B
    logic::ana_r,             // 0xA1: ANA C
    logic::ana_r,             // 0xA2: ANA D
    logic::ana_r,             // 0xA3: ANA E
    logic::ana_r,             // 0xA4: ANA H
    logic::ana_r,             // 0xA5: ANA L
    logic::ana_r,             // 0xA6: ANA M
    logic::ana_r,             // 0xA7: ANA A
    logic::xra_r,             // 0xA8: XRA B
    logic::xra_r,             // 0xA9: XRA C
    logic::xra_r,             // 0xAA: XRA D
    logic::xra_r,             // 0xAB: XRA E
    logic::xra_r,             // 0xAC: XRA H
    logic::xra_r,             // 0xAD: XRA L
    logic::xra_r,             // 0xAE: XRA M
    logic::xra_r,             // 0xAF: XRA A
    // 0xB0-0xBF: ORA, CMP
    logic::ora_r,             // 0xB0: ORA B
    logic::ora_r,             // 0xB1: ORA C
    logic::ora_r,             // 0xB2: ORA D
    logic::ora_r,             // 0xB3: ORA E
    logic::ora_r,             // 0xB4: ORA H
    logic::ora_r,             // 0xB5: ORA L
    logic::ora_r,             // 0xB6: ORA M
    logic::ora_r,             // 0xB7: ORA A
    arithmetic::cmp_r,        // 0xB8: CMP B
    arithmetic::cmp_r,        // 0xB9: CMP C
    arithmetic::cmp_r,        // 0xBA: CMP D
    arithmetic::cmp_r,        // 0xBB: CMP E
    arithmetic::cmp_r,        // 0xBC: CMP H
    arithmetic::cmp_r,        // 0xBD: CMP L
    arithmetic::cmp_r,        // 0xBE: CMP M
    arithmetic::cmp_r,        // 0xBF: CMP A
    // 0xC0-0xCF
    control_flow::ret_cond,   // 0xC0: RNZ
    stack::pop,               // 0xC1: POP B
    control_flow::jmp_cond,   // 0xC2: JNZ a16
    control_flow::jmp,        // 0xC3: JMP a16
    control_flow::call_cond,  // 0xC4: CNZ a16
    stack::push,              // 0xC5: PUSH B
    arithmetic::adi,          // 0xC6: ADI d8
    control_flow::rst,        // 0xC7: RST 0
    control_flow::ret_cond,   // 0xC8: RZ
    control_flow::ret,        // 0xC9: RET
    control_flow::jmp_cond,   // 0xCA: JZ a16
    control_flow::jmp,        // 0xCB: JMP a16 (undocumented alias)
    control_flow::call_cond,  // 0xCC: CZ a16
    control_flow::call,       // 0xCD: CALL a16
    arithmetic::aci,          // 0xCE: ACI d8
    control_flow::rst,        // 0xCF: RST 1
    // 0xD0-0xDF
    control_flow::ret_cond,   // 0xD0: RNC
    stack::pop,               // 0xD1: POP D
    control_flow::jmp_cond,   // 0xD2: JNC a16
    io::out_port,             // 0xD3: OUT d8
    control_flow::call_cond,  // 0xD4: CNC a16
    stack::push,              // 0xD5: PUSH D
    arithmetic::sui,          // 0xD6: SUI d8
    control_flow::rst,        // 0xD7: RST 2
    control_flow::ret_cond,   // 0xD8: RC
    control_flow::ret,        // 0xD9: RET (undocumented alias)
    control_flow::jmp_cond,   // 0xDA: JC a16
    io::in_port,              // 0xDB: IN d8
    control_flow::call_cond,  // 0xDC: CC a16
    control_flow::call,       // 0xDD: CALL a16 (undocumented alias)
    arithmetic::sbi,          // 0xDE: SBI d8
    control_flow::rst,        // 0xDF: RST 3
    // 0xE0-0xEF
    control_flow::ret_cond,   // 0xE0: RPO
    stack::pop,               // 0xE1: POP H
    control_flow::jmp_cond,   // 0xE2: JPO a16
    data_transfer::xthl,      // 0xE3: XTHL
    control_flow::call_cond,  // 0xE4: CPO a16
    stack::push,              // 0xE5: PUSH H
    logic::ani,               // 0xE6: ANI d8
    control_flow::rst,        // 0xE7: RST 4
    control_flow::ret_cond,   // 0xE8: RPE
    control_flow::pchl,       // 0xE9: PCHL
    control_flow::jmp_cond,   // 0xEA: JPE a16
    data_transfer::xchg,      // 0xEB: XCHG
    control_flow::call_cond,  // 0xEC: CPE a16
    control_flow::call,       // 0xED: CALL a16 (undocumented alias)
    logic::xri,               // 0xEE: XRI d8
    control_flow::rst,        // 0xEF: RST 5
    // 0xF0-0xFF
    control_flow::ret_cond,   // 0xF0: RP
    stack::pop,               // 0xF1: POP PSW
    control_flow::jmp_cond,   // 0xF2: JP a16
    ei_di,                    // 0xF3: DI (accepted no-op)
    control_flow::call_cond,  // 0xF4: CP a16
    stack::push,              // 0xF5: PUSH PSW
    logic::ori,               // 0xF6: ORI d8
    control_flow::rst,        // 0xF7: RST 6
    control_flow::ret_cond,   // 0xF8: RM
    data_transfer::sphl,      // 0xF9: SPHL
    control_flow::jmp_cond,   // 0xFA: JM a16
    ei_di,                    // 0xFB: EI (accepted no-op)
    control_flow::call_cond,  // 0xFC: CM a16
    control_flow::call,       // 0xFD: CALL a16 (undocumented alias)
    arithmetic::cpi,          // 0xFE: CPI d8
    control_flow::rst,        // 0xFF: RST 7
];
