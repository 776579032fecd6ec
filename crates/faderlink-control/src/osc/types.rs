//! OSC type conversion helpers

use crate::{error::ControlError, Result};
use rosc::{OscPacket, OscType};

/// Extract a fader level from the arguments of a reply message
///
/// Only the first argument is considered. Consoles reply with a 32-bit
/// float; a 64-bit double is narrowed.
pub fn fader_value(osc_args: &[OscType]) -> Result<f32> {
    let first = osc_args
        .first()
        .ok_or_else(|| ControlError::Query("Reply carries no OSC arguments".to_string()))?;

    match first {
        OscType::Float(f) => Ok(*f),
        OscType::Double(d) => Ok(*d as f32),
        other => Err(ControlError::Query(format!(
            "Fader reply argument is not a float: {:?}",
            other
        ))),
    }
}

/// Short name of a decoded packet, for error reporting
pub fn packet_kind(packet: &OscPacket) -> &'static str {
    match packet {
        OscPacket::Message(_) => "message",
        OscPacket::Bundle(_) => "bundle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosc::{OscBundle, OscMessage, OscTime};

    #[test]
    fn test_fader_value_float() {
        let args = vec![OscType::Float(0.75)];
        assert_eq!(fader_value(&args).unwrap(), 0.75);
    }

    #[test]
    fn test_fader_value_uses_first_argument() {
        let args = vec![OscType::Float(0.25), OscType::Float(0.9)];
        assert_eq!(fader_value(&args).unwrap(), 0.25);
    }

    #[test]
    fn test_fader_value_double() {
        let args = vec![OscType::Double(0.5)];
        assert_eq!(fader_value(&args).unwrap(), 0.5);
    }

    #[test]
    fn test_fader_value_rejects_other_types() {
        assert!(matches!(
            fader_value(&[OscType::Int(1)]),
            Err(ControlError::Query(_))
        ));
        assert!(matches!(
            fader_value(&[OscType::String("0.5".to_string())]),
            Err(ControlError::Query(_))
        ));
    }

    #[test]
    fn test_fader_value_empty() {
        assert!(matches!(fader_value(&[]), Err(ControlError::Query(_))));
    }

    #[test]
    fn test_packet_kind() {
        let message = OscPacket::Message(OscMessage {
            addr: "/ch/01/mix/fader".to_string(),
            args: vec![],
        });
        let bundle = OscPacket::Bundle(OscBundle {
            timetag: OscTime {
                seconds: 0,
                fractional: 1,
            },
            content: vec![],
        });

        assert_eq!(packet_kind(&message), "message");
        assert_eq!(packet_kind(&bundle), "bundle");
    }
}
