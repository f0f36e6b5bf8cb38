use crate::chip8::Chip8;
use crate::config::ReturnPolicy;
use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_ADDR, GLYPH_HEIGHT};
use crate::display::Display;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::random::RandomSource;

impl<D: Display, I: Input, R: RandomSource> Chip8<D, I, R> {
    /// clear
    pub(crate) fn clear_display(&mut self) {
        self.display.clear();
    }

    /// PC = STACK.pop()
    pub(crate) fn ret(&mut self) -> Result<()> {
        match self.state.stack.pop() {
            Some(pc) => self.state.pc = pc,
            None => match self.config().return_policy {
                ReturnPolicy::Ignore => {
                    log::warn!("ignoring return with an empty stack at {:#05X}", self.state.pc)
                }
                ReturnPolicy::Fault => return Err(Error::StackUnderflow { pc: self.state.pc }),
            },
        }
        Ok(())
    }

    /// PC = addr
    pub(crate) fn goto(&mut self, addr: u16) {
        self.state.pc = addr & 0x0FFF;
    }

    /// STACK.push(PC); PC = addr
    pub(crate) fn call(&mut self, addr: u16) {
        self.state.stack.push(self.state.pc);
        self.state.pc = addr & 0x0FFF;
    }

    /// if condition then PC += 2
    pub(crate) fn skip_if(&mut self, condition: bool) {
        if condition {
            self.state.pc = self.state.pc.wrapping_add(2);
        }
    }

    /// Vx = nn
    pub(crate) fn set_register(&mut self, x: u8, nn: u8) {
        *self.state.register_mut(x) = nn;
    }

    /// Vx += nn
    /// Overflow wraps and VF is left alone
    pub(crate) fn add_immediate(&mut self, x: u8, nn: u8) {
        let vx = self.state.register_mut(x);
        *vx = vx.wrapping_add(nn);
    }

    /// Vx = Vy
    pub(crate) fn assign(&mut self, x: u8, y: u8) {
        *self.state.register_mut(x) = self.state.register(y);
    }

    /// Vx |= Vy
    pub(crate) fn or(&mut self, x: u8, y: u8) {
        *self.state.register_mut(x) |= self.state.register(y);
    }

    /// Vx &= Vy
    pub(crate) fn and(&mut self, x: u8, y: u8) {
        *self.state.register_mut(x) &= self.state.register(y);
    }

    /// Vx ^= Vy
    pub(crate) fn xor(&mut self, x: u8, y: u8) {
        *self.state.register_mut(x) ^= self.state.register(y);
    }

    /// Vx += Vy; VF = overflow
    pub(crate) fn add_registers(&mut self, x: u8, y: u8) {
        let (res, over) = self.state.register(x).overflowing_add(self.state.register(y));
        self.state.set_flag(over);
        *self.state.register_mut(x) = res;
    }

    /// Vx -= Vy; VF = Vx > Vy
    pub(crate) fn subtract(&mut self, x: u8, y: u8) {
        let (vx, vy) = (self.state.register(x), self.state.register(y));
        self.state.set_flag(vx > vy);
        *self.state.register_mut(x) = vx.wrapping_sub(vy);
    }

    /// Vx >>= 1; VF = lsb
    pub(crate) fn shift_right(&mut self, x: u8) {
        let vx = self.state.register(x);
        self.state.set_flag(vx & 0x1 == 0x1);
        *self.state.register_mut(x) = vx >> 1;
    }

    /// Vx = Vy - Vx; VF = Vy > Vx
    pub(crate) fn reverse_subtract(&mut self, x: u8, y: u8) {
        let (vx, vy) = (self.state.register(x), self.state.register(y));
        self.state.set_flag(vy > vx);
        *self.state.register_mut(x) = vy.wrapping_sub(vx);
    }

    /// Vx <<= 1; VF = msb
    pub(crate) fn shift_left(&mut self, x: u8) {
        let vx = self.state.register(x);
        self.state.set_flag(vx & 0x80 == 0x80);
        *self.state.register_mut(x) = vx << 1;
    }

    /// I = addr
    pub(crate) fn set_index(&mut self, addr: u16) {
        self.state.i = addr & 0x0FFF;
    }

    /// PC = V0 + addr
    pub(crate) fn jump_with_offset(&mut self, addr: u16) {
        self.state.pc = (addr & 0x0FFF).wrapping_add(u16::from(self.state.register(0x0)));
    }

    /// Vx = rand_byte & nn
    pub(crate) fn and_random(&mut self, x: u8, nn: u8) {
        let rand_byte = self.rng.random_byte();
        *self.state.register_mut(x) = rand_byte & nn;
    }

    /// draw_sprite(x=Vx y=Vy size=n)
    /// XORs the n-row sprite at I onto the display at (Vx, Vy).
    /// Rows past the bottom edge and columns past the right edge are clipped.
    /// VF is set if any lit pixel was turned off.
    pub(crate) fn draw(&mut self, x: u8, y: u8, n: u8) -> Result<()> {
        let origin_x = self.state.register(x) as usize;
        let origin_y = self.state.register(y) as usize;
        self.state.set_flag(false);

        let mut collided = false;
        for row in 0..n as usize {
            let y = origin_y + row;
            if y >= DISPLAY_HEIGHT {
                break;
            }

            let sprite = self.read(self.state.i as usize + row)?;
            for bit in 0..8 {
                let x = origin_x + bit;
                if x >= DISPLAY_WIDTH {
                    break;
                }
                if sprite & (0x80 >> bit) != 0 {
                    collided |= self.display.draw_pixel(x, y);
                }
            }
        }

        self.state.set_flag(collided);
        Ok(())
    }

    /// Vx = DT
    pub(crate) fn get_delay_timer(&mut self, x: u8) {
        *self.state.register_mut(x) = self.state.delay_timer;
    }

    /// await keypress for Vx
    /// Takes an already pending key straight away, otherwise suspends until `cycle` sees one.
    pub(crate) fn wait_for_key(&mut self, x: u8) {
        match self.input.pending_key() {
            Some(key) => *self.state.register_mut(x) = key,
            None => {
                log::debug!("V{:X} waiting for a key", x);
                self.state.register_needing_key = Some(x);
            }
        }
    }

    /// DT = Vx
    pub(crate) fn set_delay_timer(&mut self, x: u8) {
        self.state.delay_timer = self.state.register(x);
    }

    /// ST = Vx
    pub(crate) fn set_sound_timer(&mut self, x: u8) {
        self.state.sound_timer = self.state.register(x);
    }

    /// I += Vx
    pub(crate) fn add_to_index(&mut self, x: u8) {
        self.state.i = self.state.i.wrapping_add(u16::from(self.state.register(x)));
    }

    /// I = FONT_ADDR + Vx * 5
    /// Only the low nibble of Vx selects the glyph
    pub(crate) fn set_index_to_glyph(&mut self, x: u8) {
        let glyph = u16::from(self.state.register(x) & 0x0F);
        self.state.i = FONT_ADDR + GLYPH_HEIGHT * glyph;
    }

    /// mem[I..I+3] = bcd(Vx)
    pub(crate) fn store_bcd(&mut self, x: u8) -> Result<()> {
        let vx = self.state.register(x);
        let i = self.state.i as usize;
        self.write(i, vx / 100)?;
        self.write(i + 1, vx / 10 % 10)?;
        self.write(i + 2, vx % 10)
    }

    /// mem[I..=I+x] = V0..=Vx
    pub(crate) fn dump_registers(&mut self, x: u8) -> Result<()> {
        let i = self.state.i as usize;
        for c in 0..=x {
            self.write(i + c as usize, self.state.register(c))?;
        }
        Ok(())
    }

    /// V0..=Vx = mem[I..=I+x]
    pub(crate) fn load_registers(&mut self, x: u8) -> Result<()> {
        let i = self.state.i as usize;
        for c in 0..=x {
            *self.state.register_mut(c) = self.read(i + c as usize)?;
        }
        Ok(())
    }
}
