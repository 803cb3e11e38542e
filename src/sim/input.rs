use bitflags::bitflags;

bitflags! {
    /// Directional keys polled by the camera controller every update.
    ///
    /// Hosts translate their native key codes into this set once per frame.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Keys: u8 {
        // Bank and turn left.
        const LEFT  = 0b0001;
        // Bank and turn right.
        const RIGHT = 0b0010;
        // Push the stick forward: nose down, tilt toward 0.
        const UP    = 0b0100;
        // Pull the stick back: nose up, tilt toward 2.
        const DOWN  = 0b1000;
    }
}
