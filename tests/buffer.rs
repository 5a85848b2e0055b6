mod tests {
    use status_strip::LightError;
    use status_strip::buffer::ColorBuffer;
    use status_strip::color::{GREEN, OFF, RED};

    #[test]
    fn test_new_buffer_is_dark() {
        let buffer = ColorBuffer::<8>::new(5).unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_slice(), &[OFF; 5]);
        assert_eq!(buffer.is_lit(4), Ok(false));
    }

    #[test]
    fn test_new_buffer_over_capacity() {
        assert_eq!(
            ColorBuffer::<8>::new(9).err(),
            Some(LightError::TooManyLights {
                requested: 9,
                capacity: 8
            })
        );
        assert!(ColorBuffer::<8>::new(0).unwrap().is_empty());
    }

    #[test]
    fn test_set_and_fill() {
        let mut buffer = ColorBuffer::<8>::new(3).unwrap();
        buffer.set(1, RED).unwrap();
        assert_eq!(buffer.get(1), Ok(RED));
        assert_eq!(buffer.is_lit(1), Ok(true));

        buffer.fill(GREEN);
        assert_eq!(buffer.as_slice(), &[GREEN; 3]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut buffer = ColorBuffer::<8>::new(3).unwrap();
        let error = LightError::InvalidIndex {
            index: 3,
            light_count: 3,
        };
        assert_eq!(buffer.set(3, RED), Err(error));
        assert_eq!(buffer.get(3), Err(error));
        assert_eq!(buffer.as_slice(), &[OFF; 3]);
    }
}
