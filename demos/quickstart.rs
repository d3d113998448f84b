use timestrip::{Axis, AxisConfig, Bosparanian, Coptic, Gregorian, TimeDelta, TimePeriod, TimeType};

fn main() -> timestrip::Result<()> {
    let now = Gregorian::now();
    let coptic = now.to::<Coptic>();
    let bosparanian = now.to::<Bosparanian>();

    println!("Gregorian: {now}");
    println!("Coptic: {coptic}");
    println!("Bosparanian: {bosparanian}");

    let week = TimePeriod::new(now.floor_to_day(), now.floor_to_day() + TimeDelta::from_days(7))?;
    let axis = Axis::new(week, 1_200.0, &AxisConfig::default())?;
    for tick in axis.major_ticks() {
        println!("{:>8.1}px  {}", axis.x_for(tick.time), tick.label);
    }
    Ok(())
}
