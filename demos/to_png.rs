use std::env::args;
use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use bezier_trail::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rgb::FromSlice;

// usage: to_png <seed> <seconds> <prefix>
fn main() {
	let mut args = args().skip(1);
	let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
	let seconds: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5.0);
	let prefix = args.next().unwrap_or_else(|| "trail".into());
	let png_name = format!("{}.png", &prefix);

	let config = PathConfig::new();
	let mut source = RandomPoints::new(StdRng::seed_from_u64(seed));
	let path = PathModel::from_config(&config, &mut source).unwrap();
	path.log_path();

	let playback = Playback::new(0.0);
	let visible = playback.visible_count(seconds, &path);
	println!("{} of {} points visible after {}s", visible, path.point_count(), seconds);

	let (w, h) = (400, 400);
	let length = w * h;
	let mut canvas: Vec<u8> = vec![0; length * 4];
	let mut mask = vec![0; length];

	Preview::default()
		.render_playback::<4>(&path, visible, canvas.as_rgba_mut(), &mut mask, w, h, w)
		.unwrap();

	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(&canvas).unwrap();
	}
	write(&png_name, &png_buf).unwrap();
}
